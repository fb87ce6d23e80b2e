//! Display formatting for terminal output
//!
//! Table rendering of the dashboard for the non-interactive commands.

pub mod summary;
pub mod transaction;

pub use summary::format_summary;
pub use transaction::format_transaction_list;
