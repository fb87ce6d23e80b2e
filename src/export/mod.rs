//! Export module for gofinances
//!
//! Writes the dashboard in several formats:
//! - JSON: cards, transaction list and skipped records (machine-readable)
//! - YAML: the same snapshot, human-readable
//! - CSV: the transaction list only (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
