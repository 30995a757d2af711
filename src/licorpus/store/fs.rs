use crate::error::{CorpusError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CorpusError::Io)?;
        }
        Ok(())
    }

    /// Create an empty file unless one already exists. Returns whether it was created.
    pub fn touch(&self, path: &Path) -> Result<bool> {
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                tracing::debug!(path = %path.display(), "created field file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(CorpusError::Io(e)),
        }
    }

    /// Read a text file, `None` if it does not exist.
    pub fn read_text(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CorpusError::Io(e)),
        }
    }

    /// Read and decode a JSON file, `None` if it does not exist.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match self.read_text(path)? {
            Some(content) => {
                let value = serde_json::from_str(&content).map_err(CorpusError::Serialization)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Write pretty-printed JSON (2-space indent) atomically, replacing any prior file.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(CorpusError::Serialization)?;
        self.write_atomic(path, &content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote json");
        Ok(())
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.ensure_dir(&dir)?;

        let stem = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("record");
        let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CorpusError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CorpusError::Io(e));
        }
        Ok(())
    }

    /// Names of the subdirectories of `dir`, sorted. Names ending in `.json` are skipped.
    pub fn list_entry_dirs(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(CorpusError::Io)? {
            let entry = entry.map_err(CorpusError::Io)?;
            if !entry.file_type().map_err(CorpusError::Io)?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.ends_with(".json") {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Remove `dir` if it is empty. Returns whether it was removed.
    pub fn remove_dir_if_empty(&self, dir: &Path) -> bool {
        match fs::remove_dir(dir) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "left directory in place");
                false
            }
        }
    }
}
