//! File-backed keyed store.
//!
//! One file per key under a root directory, `<root>/<key>.json`. The root
//! plays the role of the browser profile: records are durable across
//! process restarts but private to the directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::KeyedStore;

/// A keyed store persisting each record as a file under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory holding this store's records.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to its record file.
    ///
    /// Keys are restricted to `[A-Za-z0-9._-]` so a key can never name a
    /// path outside the root. Keys are produced internally by the state
    /// managers; the check only guards misuse of the store directly.
    fn record_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyedStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.record_path(key)?;
        // Temp-write then rename: a reader never observes a half-written
        // record, which is the single-key atomic overwrite the contract
        // promises.
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
