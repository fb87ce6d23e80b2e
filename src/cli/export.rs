//! CLI command for data export
//!
//! Writes the dashboard snapshot to a file, or to stdout when no output path
//! is given.

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_json, export_transactions_csv, export_yaml, DashboardExport};
use crate::models::UserId;
use crate::services::DashboardService;
use crate::storage::KeyValueStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction list only)
    Csv,
    /// JSON format (cards, list and skipped records)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    store: &dyn KeyValueStore,
    settings: &Settings,
    user: &UserId,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> FinanceResult<()> {
    let summary = DashboardService::new(store, settings).load_and_aggregate(user)?;
    let count = summary.transactions.len();

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_transactions_csv(&summary.transactions, &mut writer)?,
        ExportFormat::Json => {
            let export = DashboardExport::new(user, settings, summary);
            export_json(&export, &mut writer, pretty)?;
        }
        ExportFormat::Yaml => {
            let export = DashboardExport::new(user, settings, summary);
            export_yaml(&export, &mut writer)?;
        }
    }
    writer.flush()?;

    if let Some(path) = output {
        // Status goes to stderr so stdout stays clean when piping
        eprintln!("Exported {} transactions to: {}", count, path.display());
    }

    Ok(())
}
