//! Configuration module for gofinances
//!
//! This module provides configuration management including:
//! - Base/data directory resolution
//! - User settings persistence (locale, currency, storage namespace)

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{LocaleSettings, MalformedRecordPolicy, Settings};
