//! Key-value store abstraction and its implementations
//!
//! The dashboard only needs string values under namespaced string keys. The
//! file-backed store keeps every key in one JSON object and re-reads the file
//! on each `get_item`, so a refresh always sees the latest persisted state.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::{FinanceError, FinanceResult};

/// A get/set string store
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `None` when nothing is stored
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> FinanceResult<()>;
}

/// Store persisted as a single JSON object on disk
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> FinanceResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>> {
        debug!(key, path = %self.path.display(), "reading key");
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> FinanceResult<()> {
        let _guard = self.write_lock.lock().map_err(|e| {
            FinanceError::StorageUnavailable(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &all)?;

        debug!(key, bytes = value.len(), "wrote key");
        Ok(())
    }
}

/// Process-local store, used for tests and scratch sessions
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one key
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut data) = store.data.write() {
            data.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            FinanceError::StorageUnavailable(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::StorageUnavailable(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
