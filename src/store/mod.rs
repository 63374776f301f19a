//! Durable string-keyed storage.
//!
//! The search history and the theme preference share one key-value store.
//! `FileStore` keeps the whole map in a single JSON file and rewrites it on
//! every change; `MemoryStore` is the non-durable fallback used when the file
//! cannot be used and in tests.
//!
//! Durability is limited to "survives process restart". There is no locking
//! between concurrent `sift` processes; the last writer wins.

pub mod history;
pub mod theme;

pub use history::{SuggestionStore, HISTORY_KEY, HISTORY_LIMIT};
pub use theme::{ThemePreference, THEME_KEY};

use crate::model::StoreError;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read/write/erase contract shared by all storage backends.
pub trait KeyValueStore: Debug + Send {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Implementations may keep the new value in memory even when making it
    /// durable fails; the returned error only reports lost durability.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Erase `key`. Erasing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ===== MemoryStore =====

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

// ===== FileStore =====

/// JSON-file-backed store.
///
/// The file holds a single JSON object mapping keys to string values. Reads
/// are served from memory; every write rewrites the file through a temporary
/// sibling and a rename so a crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store (it is created on first write).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read and
    /// `StoreError::Corrupt` if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "Storage file missing, starting empty");
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let values = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every value back to disk after `key` changed.
    fn persist(&self, key: &str) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let encoded =
            serde_json::to_string_pretty(&self.values).map_err(|e| StoreError::Encode {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, encoded).map_err(io_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.persist(key)?;
        }
        Ok(())
    }
}

/// Open the file store at `path`, falling back to memory if it is unusable.
///
/// Persistence problems never stop the console: a corrupt or unreadable file
/// is logged and left untouched, and the session runs without durable state.
pub fn open_or_fallback(path: &Path) -> Box<dyn KeyValueStore> {
    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "Storage unavailable, history will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
