//! Dashboard summary view models
//!
//! Derived data, rebuilt from scratch on every aggregation pass and never
//! persisted.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::Money;
use super::transaction::TransactionKind;

/// One highlight card: a formatted total and its last-transaction label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightCard {
    /// Formatted currency total
    pub amount: String,
    /// Most recent date label, or the empty-bucket placeholder
    pub last_transaction: String,
    /// Unformatted total
    #[serde(skip)]
    pub total: Money,
    /// Date the label was derived from, if any
    #[serde(skip)]
    pub last_date: Option<NaiveDate>,
}

/// Which highlight card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Income,
    Expense,
    Total,
}

/// A display-ready transaction row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub id: String,
    pub name: String,
    /// Formatted currency amount
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    /// Formatted short date
    pub date: String,
}

/// A stored record left out of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the stored array
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub income: HighlightCard,
    pub expense: HighlightCard,
    pub total: HighlightCard,
    pub transactions: Vec<TransactionView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

impl AggregateSummary {
    /// Cards in display order: income, expense, total
    pub fn cards(&self) -> [(CardKind, &HighlightCard); 3] {
        [
            (CardKind::Income, &self.income),
            (CardKind::Expense, &self.expense),
            (CardKind::Total, &self.total),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
