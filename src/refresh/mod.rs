//! Dashboard refresh coordination
//!
//! Refreshes are requested through an explicit trigger instead of being tied
//! to any UI lifecycle. Passes may overlap; the newest-started pass wins.

pub mod state;
pub mod trigger;
pub mod worker;

pub use state::{DashboardCell, DashboardState, PassTicket, PublishOutcome};
pub use trigger::{refresh_channel, RefreshListener, RefreshReason, RefreshTrigger};
pub use worker::{refresh_now, PassReport, RefreshWorker};
