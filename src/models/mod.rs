//! Core data models for gofinances
//!
//! Stored transaction records, their typed interpretation, money, and the
//! summary view models the dashboard renders.

pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use ids::UserId;
pub use money::{Money, MoneyParseError};
pub use summary::{AggregateSummary, CardKind, HighlightCard, SkippedRecord, TransactionView};
pub use transaction::{RawAmount, Transaction, TransactionKind, TransactionRecord};
