//! Transaction model
//!
//! `TransactionRecord` is the stored shape, kept loose on purpose: amounts may
//! be JSON strings or numbers and dates are free-form timestamps. A record is
//! interpreted into a typed [`Transaction`] before it is aggregated.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Income ("up")
    #[serde(rename = "positive")]
    Income,
    /// Expense ("down")
    #[serde(rename = "negative")]
    Expense,
}

impl TransactionKind {
    /// The other kind
    pub fn opposite(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "positive" | "up" | "in" => Ok(Self::Income),
            "expense" | "negative" | "down" | "out" | "outcome" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A stored amount, either a JSON string or a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Interpret as a non-negative magnitude
    pub fn to_money(&self) -> Result<Money, String> {
        match self {
            Self::Number(n) => Money::from_decimal(*n).map_err(|e| e.to_string()),
            Self::Text(s) => Money::parse(s).map_err(|e| e.to_string()),
        }
    }
}

impl From<Money> for RawAmount {
    fn from(amount: Money) -> Self {
        Self::Text(amount.to_string())
    }
}

/// A transaction exactly as persisted in the key-value store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub name: String,
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
}

impl TransactionRecord {
    /// Create a new record with a fresh id, stamped with `occurred_at`
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount: amount.into(),
            kind,
            category: category.into(),
            date: occurred_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// A record whose amount and date have been interpreted
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub occurred_at: DateTime<FixedOffset>,
}

impl Transaction {
    /// Interpret a stored record; the error is a human-readable reason
    pub fn from_record(record: &TransactionRecord) -> Result<Self, String> {
        let amount = record.amount.to_money()?;
        let occurred_at = parse_timestamp(&record.date)
            .ok_or_else(|| format!("Unparseable date: '{}'", record.date))?;

        Ok(Self {
            id: record.id.clone(),
            name: record.name.clone(),
            amount,
            kind: record.kind,
            category: record.category.clone(),
            occurred_at,
        })
    }

    /// Calendar date in the timestamp's own offset
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TransactionKind::Income => "",
            TransactionKind::Expense => "-",
        };
        write!(
            f,
            "{} {} {}{}",
            self.date().format("%Y-%m-%d"),
            self.name,
            sign,
            self.amount
        )
    }
}

/// Parse a stored timestamp
///
/// Accepts RFC 3339 (`2024-01-10T12:00:00.000Z`), naive date-times (taken as
/// UTC) and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    let utc = FixedOffset::east_opt(0)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(naive.and_utc().with_timezone(&utc));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(&utc))
}
