//! Reports module for gofinances
//!
//! Aggregations computed from stored transactions.

pub mod dashboard;

pub use dashboard::{aggregate, aggregate_records};
