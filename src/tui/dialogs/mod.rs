//! Dialog components for the TUI

pub mod help;
pub mod transaction;
