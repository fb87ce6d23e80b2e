//! JSON export of the dashboard

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::locale::{Currency, Locale};
use crate::models::{AggregateSummary, UserId};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A dashboard snapshot as written by `export`
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub user: UserId,
    pub locale: Locale,
    pub currency: Currency,
    #[serde(flatten)]
    pub summary: AggregateSummary,
}

impl DashboardExport {
    pub fn new(user: &UserId, settings: &Settings, summary: AggregateSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: user.clone(),
            locale: settings.locale.locale,
            currency: settings.locale.currency,
            summary,
        }
    }
}

/// Write the snapshot as JSON
pub fn export_json<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
