use crate::model::EntryKind;
use std::path::PathBuf;

pub mod add_adaption;
pub mod add_custom;
pub mod init_adaption;
pub mod init_custom;

/// Resolved corpus locations, see [`crate::config::CorpusConfig::paths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub root: PathBuf,
    pub custom: PathBuf,
    pub adaptions: PathBuf,
    pub details: PathBuf,
    pub exceptions: PathBuf,
    pub custom_index: PathBuf,
    pub adaption_index: PathBuf,
}

impl CorpusPaths {
    pub fn custom_entry(&self, shortname: &str) -> PathBuf {
        self.custom.join(shortname)
    }

    pub fn custom_record(&self, shortname: &str) -> PathBuf {
        self.custom.join(format!("{}.json", shortname))
    }

    pub fn adaption_entry(&self, shortname: &str) -> PathBuf {
        self.adaptions.join(shortname)
    }

    pub fn adaption_record(&self, shortname: &str) -> PathBuf {
        self.adaptions.join(format!("{}.json", shortname))
    }

    /// Pre-existing record this tool only reads.
    pub fn canonical_record(&self, kind: EntryKind, shortname: &str) -> PathBuf {
        let dir = match kind {
            EntryKind::License => &self.details,
            EntryKind::Exception => &self.exceptions,
        };
        dir.join(format!("{}.json", shortname))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Field files created by a scaffolding command.
    pub created_files: Vec<PathBuf>,
    /// Record files (`<id>.json`) written by an assembling command.
    pub written_records: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created_files(mut self, files: Vec<PathBuf>) -> Self {
        self.created_files = files;
        self
    }

    pub fn with_written_records(mut self, records: Vec<PathBuf>) -> Self {
        self.written_records = records;
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::CorpusPaths;
    use crate::config::CorpusConfig;
    use std::fs;
    use std::path::Path;

    /// Standard layout under `root` with empty index files.
    pub fn corpus(root: &Path) -> CorpusPaths {
        let paths = CorpusConfig::default().paths(root);
        fs::create_dir_all(&paths.custom).unwrap();
        fs::create_dir_all(&paths.adaptions).unwrap();
        fs::create_dir_all(&paths.details).unwrap();
        fs::create_dir_all(&paths.exceptions).unwrap();
        fs::write(&paths.custom_index, r#"{"licenses": []}"#).unwrap();
        fs::write(&paths.adaption_index, r#"{"adaptions": []}"#).unwrap();
        paths
    }

    pub fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }
}
