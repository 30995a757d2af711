use crate::error::{CorpusError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// RAII guard over an exclusive advisory lock; released on drop.
#[derive(Debug)]
pub struct IndexLock {
    file: File,
    path: PathBuf,
}

impl IndexLock {
    /// Block until the lock guarding `target` is held.
    ///
    /// The lock lives in `<target>.lock` next to the guarded file. The lock file
    /// is left in place after release.
    pub fn acquire(target: &Path) -> Result<Self> {
        let path = lock_path(target);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(CorpusError::Io)?;
        file.lock_exclusive().map_err(CorpusError::Io)?;
        tracing::debug!(lock = %path.display(), "acquired index lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for IndexLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        tracing::debug!(lock = %self.path.display(), "released index lock");
    }
}

fn lock_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    target.with_file_name(name)
}
