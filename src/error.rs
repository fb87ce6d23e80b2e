//! Custom error types for gofinances
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for gofinances operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// The key-value store could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored payload is not the expected structure
    #[error("Corrupt data under '{key}': {reason}")]
    CorruptData { key: String, reason: String },

    /// A single transaction record could not be interpreted
    #[error("Malformed transaction record #{index}{}: {reason}", record_suffix(.id))]
    MalformedRecord {
        index: usize,
        id: Option<String>,
        reason: String,
    },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A computed total does not fit the money range
    #[error("Total out of range: {0}")]
    OutOfRange(String),
}

impl FinanceError {
    /// Create a "corrupt data" error for a storage key
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error means the store itself failed
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Check if this error means stored data could not be interpreted
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. } | Self::MalformedRecord { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

fn record_suffix(id: &Option<String>) -> String {
    id.as_deref()
        .map(|id| format!(" ({})", id))
        .unwrap_or_default()
}

/// Result type alias for gofinances operations
pub type FinanceResult<T> = Result<T, FinanceError>;
