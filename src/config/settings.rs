//! User settings for gofinances
//!
//! Manages the locale/currency pair used for formatting, the storage namespace,
//! how malformed stored records are treated, and the TUI refresh cadence.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::locale::{Currency, Locale, LocaleFormat};

/// Default namespace prefixed to every storage key
pub const DEFAULT_NAMESPACE: &str = "@gofinances";

/// What to do with a stored record that cannot be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// Leave the record out of totals and the list, and report it
    #[default]
    Skip,
    /// Fail the whole aggregation pass
    Abort,
}

/// Locale and currency used for all formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub currency: Currency,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr,
            currency: Currency::Brl,
        }
    }
}

impl LocaleSettings {
    /// Build the formatter for this locale/currency pair
    pub fn format(&self) -> LocaleFormat {
        LocaleFormat::new(self.locale, self.currency)
    }
}

/// User settings for gofinances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Formatting locale and currency
    #[serde(default)]
    pub locale: LocaleSettings,

    /// Namespace prefixed to storage keys
    #[serde(default = "default_namespace")]
    pub storage_namespace: String,

    /// Treatment of records that fail to parse
    #[serde(default)]
    pub malformed_records: MalformedRecordPolicy,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: LocaleSettings::default(),
            storage_namespace: default_namespace(),
            malformed_records: MalformedRecordPolicy::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings that would produce unusable storage keys or a busy loop
    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.storage_namespace.trim().is_empty() {
            return Err(FinanceError::Config(
                "storage_namespace must not be empty".into(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(FinanceError::Config("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }

    /// Formatter for the configured locale/currency
    pub fn locale_format(&self) -> LocaleFormat {
        self.locale.format()
    }
}
