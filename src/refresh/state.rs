//! Shared dashboard state
//!
//! Several aggregation passes for the same user may be in flight at once.
//! Every pass takes a ticket when it starts; when it finishes it may only
//! publish if no pass started after it has published already.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::FinanceResult;
use crate::models::AggregateSummary;

/// What the dashboard currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardState {
    /// No pass has completed yet
    #[default]
    Loading,
    /// The latest published pass succeeded
    Ready(AggregateSummary),
    /// The latest published pass failed
    Failed {
        message: String,
        /// Summary from the last successful pass, still shown
        previous: Option<AggregateSummary>,
    },
}

impl DashboardState {
    /// The summary to render, if any
    pub fn summary(&self) -> Option<&AggregateSummary> {
        match self {
            Self::Loading => None,
            Self::Ready(summary) => Some(summary),
            Self::Failed { previous, .. } => previous.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Identifies one aggregation pass, ordered by start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PassTicket(u64);

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Result of publishing a finished pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The state now reflects this pass
    Applied,
    /// A newer pass published first; this result was dropped
    Stale,
}

#[derive(Debug, Default)]
struct CellInner {
    state: DashboardState,
    /// Last ticket handed out
    issued: u64,
    /// Ticket of the pass currently shown, 0 if none
    published: u64,
}

/// Handle to the dashboard state shared between the UI and refresh passes
#[derive(Debug, Clone, Default)]
pub struct DashboardCell {
    inner: Arc<Mutex<CellInner>>,
}

impl DashboardCell {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CellInner> {
        // A panicking pass cannot leave the state half-written
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a pass
    pub fn begin_pass(&self) -> PassTicket {
        let mut inner = self.lock();
        inner.issued += 1;
        PassTicket(inner.issued)
    }

    /// Publish a finished pass unless a newer one already has
    ///
    /// A failure keeps whatever summary was visible before it.
    pub fn publish(
        &self,
        ticket: PassTicket,
        result: FinanceResult<AggregateSummary>,
    ) -> PublishOutcome {
        let mut inner = self.lock();
        if ticket.0 <= inner.published {
            return PublishOutcome::Stale;
        }

        inner.published = ticket.0;
        inner.state = match result {
            Ok(summary) => DashboardState::Ready(summary),
            Err(e) => {
                let previous = inner.state.summary().cloned();
                DashboardState::Failed {
                    message: e.to_string(),
                    previous,
                }
            }
        };
        PublishOutcome::Applied
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.lock().state.clone()
    }

    /// True while a pass newer than the shown one is still running
    pub fn is_refreshing(&self) -> bool {
        let inner = self.lock();
        inner.issued > inner.published
    }
}
