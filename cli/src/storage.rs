//! File-backed session storage: one file per key under the state directory.
//!
//! `<state-dir>/token` holds the raw token, `<state-dir>/user` the JSON
//! profile, mirroring the browser's two `localStorage` entries.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use session::{Storage, StorageError};

#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "unreadable state file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |err: std::io::Error| StorageError::Write { key: key.to_owned(), reason: err.to_string() };
        fs::create_dir_all(&self.dir).map_err(write_error)?;
        fs::write(self.path(key), value).map_err(write_error)
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(key, error = %err, "could not remove state file"),
        }
    }
}
