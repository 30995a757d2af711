use clap::Parser;
use colored::*;
use licorpus::api::{CmdMessage, CorpusApi, MessageLevel};
use licorpus::error::{CorpusError, Result};
use licorpus::model::EntryKind;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over `--verbose`, which wins over the default.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "licorpus=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let api = CorpusApi::open(&cli.root)?;
    tracing::debug!(root = %cli.root.display(), "opened corpus");
    let shortname = cli.shortname.as_deref();

    match cli.command {
        Commands::InitCustom { kind } => {
            let shortname = require_shortname(shortname, "init_custom")?;
            handle_init_custom(&api, shortname, kind.into())
        }
        Commands::AddCustom => handle_add_custom(&api, shortname),
        Commands::InitAdaption { target } => {
            let shortname = require_shortname(shortname, "init_adaption")?;
            handle_init_adaption(&api, shortname, target.kind(), &target.requested_fields())
        }
        Commands::AddAdaption { note } => {
            let shortname = require_shortname(shortname, "add_adaption")?;
            handle_add_adaption(&api, shortname, &note)
        }
    }
}

fn require_shortname<'a>(shortname: Option<&'a str>, command: &'static str) -> Result<&'a str> {
    shortname.ok_or(CorpusError::MissingShortname { command })
}

fn handle_init_custom(api: &CorpusApi, shortname: &str, kind: EntryKind) -> Result<()> {
    let result = api.init_custom(shortname, kind)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_custom(api: &CorpusApi, shortname: Option<&str>) -> Result<()> {
    let result = api.add_custom(shortname)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init_adaption(
    api: &CorpusApi,
    shortname: &str,
    kind: EntryKind,
    fields: &[&str],
) -> Result<()> {
    let result = api.init_adaption(shortname, kind, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_adaption(api: &CorpusApi, shortname: &str, note: &str) -> Result<()> {
    let result = api.add_adaption(shortname, note)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
