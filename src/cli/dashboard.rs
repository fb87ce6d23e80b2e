//! Dashboard CLI commands
//!
//! `summary` prints the three highlight cards, `list` the transaction list.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{HighlightCard, UserId};
use crate::services::DashboardService;
use crate::storage::KeyValueStore;

/// Output format for `summary`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON object with the three cards
    Json,
    /// YAML document with the three cards
    Yaml,
}

#[derive(Serialize)]
struct CardsOutput<'a> {
    income: &'a HighlightCard,
    expense: &'a HighlightCard,
    total: &'a HighlightCard,
}

/// Handle the summary command
pub fn handle_summary_command(
    store: &dyn KeyValueStore,
    settings: &Settings,
    user: &UserId,
    format: SummaryFormat,
) -> FinanceResult<()> {
    let summary = DashboardService::new(store, settings).load_and_aggregate(user)?;
    let locale = settings.locale_format();

    match format {
        SummaryFormat::Table => {
            println!("{} {}", locale.labels().greeting, user);
            println!("{}", format_summary(&summary, locale.labels()));
        }
        SummaryFormat::Json => {
            let cards = CardsOutput {
                income: &summary.income,
                expense: &summary.expense,
                total: &summary.total,
            };
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &cards)?;
            writeln!(stdout)?;
        }
        SummaryFormat::Yaml => {
            let cards = CardsOutput {
                income: &summary.income,
                expense: &summary.expense,
                total: &summary.total,
            };
            let yaml =
                serde_yaml::to_string(&cards).map_err(|e| FinanceError::Export(e.to_string()))?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list_command(
    store: &dyn KeyValueStore,
    settings: &Settings,
    user: &UserId,
    limit: usize,
) -> FinanceResult<()> {
    let summary = DashboardService::new(store, settings).load_and_aggregate(user)?;
    let locale = settings.locale_format();

    println!("{}", locale.labels().list_title);
    println!(
        "{}",
        format_transaction_list(
            &summary.transactions,
            Some(limit),
            locale.empty_bucket_label()
        )
    );

    Ok(())
}
