//! Path management for gofinances
//!
//! Provides path resolution for configuration, stored data, and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `GOFINANCES_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/gofinances` on Linux,
//!    `~/Library/Application Support/gofinances` on macOS, `%APPDATA%\gofinances`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "GOFINANCES_DATA_DIR";

/// Manages all paths used by gofinances
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for all gofinances data
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Create a new FinancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the key-value store file
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir().join("storage.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("gofinances.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinanceError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("gofinances"))
}
