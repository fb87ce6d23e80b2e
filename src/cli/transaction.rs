//! Transaction CLI commands
//!
//! `add` registers a transaction from the command line, the same way the
//! TUI form does.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{TransactionKind, UserId};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::KeyValueStore;

/// Transaction type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Arguments for `add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Transaction name
    pub name: String,
    /// Amount, in the configured locale (e.g. "1.234,56" or "12.50")
    pub amount: String,
    /// Income or expense
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: KindArg,
    /// Category key
    #[arg(short, long)]
    pub category: String,
    /// Date (YYYY-MM-DD or RFC 3339), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(
    store: &dyn KeyValueStore,
    settings: &Settings,
    user: &UserId,
    args: AddArgs,
) -> FinanceResult<()> {
    let locale = settings.locale_format();

    let amount = locale
        .parse_input(&args.amount)
        .map_err(|e| FinanceError::Validation(e.to_string()))?;

    let occurred_at = args.date.as_deref().map(parse_date_arg).transpose()?;

    let input = CreateTransactionInput {
        name: args.name,
        amount,
        kind: Some(args.kind.into()),
        category: args.category,
        occurred_at,
    };

    let record = TransactionService::new(store, settings).register(user, input)?;

    println!("Saved transaction: {}", record.name);
    println!("  ID:       {}", record.id);
    println!("  Amount:   {}", locale.money(amount));
    println!("  Type:     {}", record.kind);
    println!("  Category: {}", record.category);
    println!("  Date:     {}", record.date);

    Ok(())
}

/// Parse `--date`, a plain date meaning midnight UTC
fn parse_date_arg(s: &str) -> FinanceResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| {
            FinanceError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                s
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, TransactionRepository};

    #[test]
    fn test_parse_date_arg() {
        let dt = parse_date_arg("2024-01-10").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-10T00:00:00+00:00");

        let dt = parse_date_arg("2024-01-10T15:30:00-03:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-10T18:30:00+00:00");

        assert!(parse_date_arg("10/01/2024").is_err());
    }

    #[test]
    fn test_add_uses_locale_amount() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let user = UserId::parse("7").unwrap();

        let args = AddArgs {
            name: "Aluguel".into(),
            amount: "1.200,50".into(),
            kind: KindArg::Expense,
            category: "house".into(),
            date: Some("2024-02-01".into()),
        };
        handle_add_command(&store, &settings, &user, args).unwrap();

        let stored = TransactionRepository::new(&store, &settings.storage_namespace)
            .load_raw(&user)
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["type"], "negative");
        assert_eq!(stored[0]["category"], "house");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let user = UserId::parse("7").unwrap();

        let args = AddArgs {
            name: "Coffee".into(),
            amount: "abc".into(),
            kind: KindArg::Expense,
            category: "food".into(),
            date: None,
        };
        let err = handle_add_command(&store, &settings, &user, args).unwrap_err();
        assert!(err.is_validation());
    }
}
