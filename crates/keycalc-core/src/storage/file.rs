//! File-backed preferences store
//!
//! All slots live in one JSON object on disk:
//!
//! ```text
//! {
//!   "calculationHistoryKey": "[{\"expression\":[...],\"result\":8.0}]"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as a single JSON file
#[derive(Debug)]
pub struct FileStore {
    /// Backing file path
    path: PathBuf,

    /// Cached slots, rewritten to disk on every change
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Get the default preferences file (in app data)
    pub fn default_path() -> io::Result<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find app data directory")
            })?;
        Ok(base.join("KeyCalc").join("preferences.json"))
    }

    /// Open the store at `path`
    ///
    /// A missing file, or one that is not a JSON object of strings, is an empty
    /// store. The file is rewritten on the next change.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let mut store = FileStore {
            path: path.as_ref().to_path_buf(),
            entries: BTreeMap::new(),
        };

        store.reload()?;

        Ok(store)
    }

    /// Open the store at [`FileStore::default_path`]
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(Self::default_path()?)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard cached slots and read the file again
    ///
    /// Only I/O errors are reported; undecodable content yields an empty store.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            self.entries = serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), "Discarding unreadable preferences: {e}");
                BTreeMap::new()
            });
        } else {
            self.entries = BTreeMap::new();
        }

        debug!(path = %self.path.display(), slots = self.entries.len(), "loaded preferences");

        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
