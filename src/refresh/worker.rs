//! Background refresh worker
//!
//! Listens for refresh requests and runs aggregation passes one at a time,
//! publishing into a [`DashboardCell`].

use std::sync::Arc;
use std::thread;

use tracing::{debug, info};

use super::state::{DashboardCell, PassTicket, PublishOutcome};
use super::trigger::{RefreshListener, RefreshReason};
use crate::config::Settings;
use crate::models::UserId;
use crate::services::DashboardService;
use crate::storage::KeyValueStore;

/// Reported to the completion callback after every pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub reason: RefreshReason,
    pub ticket: PassTicket,
    pub outcome: PublishOutcome,
}

/// Everything a pass needs
struct PassContext {
    store: Arc<dyn KeyValueStore>,
    settings: Settings,
    user: UserId,
    cell: DashboardCell,
}

impl PassContext {
    fn run(&self, reason: RefreshReason, ticket: PassTicket) -> PassReport {
        let service = DashboardService::new(self.store.as_ref(), &self.settings);
        let result = service.load_and_aggregate(&self.user);
        let outcome = self.cell.publish(ticket, result);

        match outcome {
            PublishOutcome::Applied => {
                debug!(%reason, generation = ticket.generation(), "refresh published")
            }
            PublishOutcome::Stale => {
                info!(%reason, generation = ticket.generation(), "discarded stale refresh")
            }
        }

        PassReport {
            reason,
            ticket,
            outcome,
        }
    }
}

/// Run one pass on the calling thread
pub fn refresh_now(
    store: &dyn KeyValueStore,
    settings: &Settings,
    user: &UserId,
    cell: &DashboardCell,
) -> PublishOutcome {
    let ticket = cell.begin_pass();
    let result = DashboardService::new(store, settings).load_and_aggregate(user);
    cell.publish(ticket, result)
}

/// Handle to the worker thread
///
/// The worker stops once every [`super::RefreshTrigger`] is dropped.
pub struct RefreshWorker {
    handle: thread::JoinHandle<()>,
}

impl RefreshWorker {
    /// Start listening for refresh requests
    ///
    /// Passes run one at a time on the worker thread. Requests that queue up
    /// while a pass runs collapse into a single pass carrying the newest
    /// reason. `on_complete` runs after each pass publishes (or is
    /// discarded), so the UI can redraw.
    pub fn spawn<F>(
        store: Arc<dyn KeyValueStore>,
        settings: Settings,
        user: UserId,
        cell: DashboardCell,
        listener: RefreshListener,
        on_complete: F,
    ) -> Self
    where
        F: Fn(PassReport) + Send + 'static,
    {
        let context = PassContext {
            store,
            settings,
            user,
            cell,
        };

        let handle = thread::spawn(move || {
            while let Some(first) = listener.recv() {
                let reason = newest_pending(&listener, first);
                let ticket = context.cell.begin_pass();
                debug!(%reason, generation = ticket.generation(), "refresh started");

                on_complete(context.run(reason, ticket));
            }
            debug!("refresh listener closed");
        });

        Self { handle }
    }

    /// Wait for the worker thread to finish its current pass and exit
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// Drain requests already queued behind `first`, keeping the newest
fn newest_pending(listener: &RefreshListener, first: RefreshReason) -> RefreshReason {
    let mut reason = first;
    let mut merged = 0usize;
    while let Some(next) = listener.try_recv() {
        reason = next;
        merged += 1;
    }
    if merged > 0 {
        debug!(merged, %reason, "coalesced queued refresh requests");
    }
    reason
}
