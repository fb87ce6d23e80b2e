//! Service layer for gofinances
//!
//! The service layer sits between the front ends and the storage layer,
//! handling validation and turning stored records into dashboard summaries.

pub mod dashboard;
pub mod transaction;

pub use dashboard::DashboardService;
pub use transaction::{CreateTransactionInput, TransactionService};
