//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod transaction;

pub use config::handle_config_command;
pub use dashboard::{handle_list_command, handle_summary_command, SummaryFormat};
pub use export::{handle_export_command, ExportFormat};
pub use transaction::{handle_add_command, AddArgs, KindArg};
