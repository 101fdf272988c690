//! Key-value persistence boundary.
//!
//! The durable state of the application (the quote list, the remembered
//! category filter, a pending sync snapshot) is read and written as string
//! values under string keys. The `Storage` trait is the seam the store is
//! tested through; `FileStorage` is the production implementation, keeping
//! one file per key inside a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::QuoteError;
use crate::result::Result;

/// String key-value persistence used by the quote store.
pub trait Storage {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed storage keeping one `<key>.json` file per key.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens the storage rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        Ok(FileStorage {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuoteError::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuoteError::Io(e)),
        }
    }
}
