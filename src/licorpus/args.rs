use clap::{Parser, Subcommand};
use licorpus::config::DEFAULT_ROOT;
use licorpus::model::EntryKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "licorpus", version)]
#[command(about = "Update license files and templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Short name of the license or exception to update
    #[arg(short, long, global = true)]
    pub shortname: Option<String>,

    /// Corpus root directory
    #[arg(short, long, global = true, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold field files for a custom license or exception
    #[command(name = "init_custom")]
    InitCustom {
        #[command(subcommand)]
        kind: KindChoice,
    },

    /// Assemble custom entries (all of them when no short name is given)
    #[command(name = "add_custom")]
    AddCustom,

    /// Scaffold field files for an adaption of a canonical record
    #[command(name = "init_adaption")]
    InitAdaption {
        #[command(subcommand)]
        target: AdaptionTarget,
    },

    /// Overlay an adaption on its canonical record and record a note
    #[command(name = "add_adaption")]
    AddAdaption {
        /// Note describing the adaption
        note: String,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindChoice {
    /// Exception
    Exc,
    /// License
    Lic,
}

impl From<KindChoice> for EntryKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Exc => EntryKind::Exception,
            KindChoice::Lic => EntryKind::License,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AdaptionTarget {
    /// Adapt fields of an exception
    Exc {
        #[arg(short = 'E', long = "licenseExceptionText")]
        license_exception_text: bool,

        #[arg(short = 'T', long = "licenseExceptionTemplate")]
        license_exception_template: bool,

        #[arg(short = 'S', long = "seeAlso")]
        see_also: bool,
    },

    /// Adapt fields of a license
    Lic {
        #[arg(short = 'L', long = "licenseText")]
        license_text: bool,

        #[arg(short = 'T', long = "standardLicenseTemplate")]
        standard_license_template: bool,

        #[arg(short = 'H', long = "standardLicenseHeader")]
        standard_license_header: bool,

        #[arg(short = 'N', long = "standardLicenseHeaderTemplate")]
        standard_license_header_template: bool,

        #[arg(short = 'S', long = "seeAlso")]
        see_also: bool,
    },
}

impl AdaptionTarget {
    pub fn kind(&self) -> EntryKind {
        match self {
            AdaptionTarget::Exc { .. } => EntryKind::Exception,
            AdaptionTarget::Lic { .. } => EntryKind::License,
        }
    }

    /// Field names selected by the flags.
    pub fn requested_fields(&self) -> Vec<&'static str> {
        let table: Vec<(bool, &'static str)> = match *self {
            AdaptionTarget::Exc {
                license_exception_text,
                license_exception_template,
                see_also,
            } => vec![
                (license_exception_text, "licenseExceptionText"),
                (license_exception_template, "licenseExceptionTemplate"),
                (see_also, "seeAlso"),
            ],
            AdaptionTarget::Lic {
                license_text,
                standard_license_template,
                standard_license_header,
                standard_license_header_template,
                see_also,
            } => vec![
                (license_text, "licenseText"),
                (standard_license_template, "standardLicenseTemplate"),
                (standard_license_header, "standardLicenseHeader"),
                (
                    standard_license_header_template,
                    "standardLicenseHeaderTemplate",
                ),
                (see_also, "seeAlso"),
            ],
        };
        table
            .into_iter()
            .filter_map(|(set, field)| set.then_some(field))
            .collect()
    }
}
