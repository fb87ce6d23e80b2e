//! Storage layer for gofinances
//!
//! A namespaced string key-value store (file-backed or in-memory) and the
//! transaction repository built on it.

pub mod file_io;
pub mod key_value;
pub mod transactions;

use std::sync::Arc;

pub use file_io::{read_json, write_json_atomic};
pub use key_value::{JsonFileStore, KeyValueStore, MemoryStore};
pub use transactions::{transactions_key, TransactionRepository};

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;

/// Open the file-backed store under the configured data directory
pub fn open_file_store(paths: &FinancePaths) -> FinanceResult<Arc<dyn KeyValueStore>> {
    paths.ensure_directories()?;
    Ok(Arc::new(JsonFileStore::new(paths.storage_file())))
}
