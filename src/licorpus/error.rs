use crate::model::EntryKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Field file not found: {}", path.display())]
    FieldFileMissing { path: PathBuf },

    #[error("Canonical record not found: {}", path.display())]
    RecordNotFound { path: PathBuf },

    #[error("Adaption directory not found: {}", path.display())]
    AdaptionNotFound { path: PathBuf },

    #[error("Index file not found: {}", path.display())]
    IndexMissing { path: PathBuf },

    #[error("Malformed index {}: {reason}", path.display())]
    MalformedIndex { path: PathBuf, reason: String },

    #[error("The {command} command requires a short name (-s/--shortname)")]
    MissingShortname { command: &'static str },

    #[error("Unknown {kind} field: {field}")]
    UnknownField { kind: EntryKind, field: String },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
