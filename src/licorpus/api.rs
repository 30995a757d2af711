//! # API Facade
//!
//! [`CorpusApi`] is the single entry point for corpus operations. It owns the store,
//! the resolved paths and the field tables, and hands them to the command functions
//! in `commands/*.rs`. It holds no logic of its own and never prints.

use crate::commands::{self, CmdResult, CorpusPaths};
use crate::config::CorpusConfig;
use crate::error::Result;
use crate::model::{EntryKind, FieldTable};
use crate::store::FileStore;
use std::path::Path;

pub struct CorpusApi {
    store: FileStore,
    paths: CorpusPaths,
    fields: FieldTable,
}

impl CorpusApi {
    pub fn new(store: FileStore, paths: CorpusPaths, fields: FieldTable) -> Self {
        Self {
            store,
            paths,
            fields,
        }
    }

    /// Build an API for the corpus rooted at `root`, reading `<root>/config.json` if present.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let config = CorpusConfig::load(root)?;
        let paths = config.paths(root);
        Ok(Self::new(FileStore::new(), paths, config.fields))
    }

    pub fn init_custom(&self, shortname: &str, kind: EntryKind) -> Result<CmdResult> {
        commands::init_custom::run(&self.store, &self.paths, &self.fields, shortname, kind)
    }

    pub fn add_custom(&self, shortname: Option<&str>) -> Result<CmdResult> {
        commands::add_custom::run(&self.store, &self.paths, &self.fields, shortname)
    }

    pub fn init_adaption<S: AsRef<str>>(
        &self,
        shortname: &str,
        kind: EntryKind,
        fields: &[S],
    ) -> Result<CmdResult> {
        commands::init_adaption::run(
            &self.store,
            &self.paths,
            &self.fields,
            shortname,
            kind,
            fields,
        )
    }

    pub fn add_adaption(&self, shortname: &str, note: &str) -> Result<CmdResult> {
        commands::add_adaption::run(&self.store, &self.paths, &self.fields, shortname, note)
    }

    pub fn paths(&self) -> &CorpusPaths {
        &self.paths
    }

    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
