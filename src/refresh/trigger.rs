//! Refresh requests
//!
//! The host UI holds a [`RefreshTrigger`] and calls it whenever the dashboard
//! should be re-aggregated; the worker owns the matching [`RefreshListener`].

use std::fmt;
use std::sync::mpsc;

/// Why a refresh was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// The dashboard was first shown
    InitialLoad,
    /// The terminal regained focus
    FocusRegained,
    /// The user asked for it
    Manual,
    /// A new transaction was just stored
    TransactionSaved,
}

impl fmt::Display for RefreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialLoad => write!(f, "initial load"),
            Self::FocusRegained => write!(f, "focus regained"),
            Self::Manual => write!(f, "manual"),
            Self::TransactionSaved => write!(f, "transaction saved"),
        }
    }
}

/// Create a connected trigger/listener pair
pub fn refresh_channel() -> (RefreshTrigger, RefreshListener) {
    let (sender, receiver) = mpsc::channel();
    (RefreshTrigger { sender }, RefreshListener { receiver })
}

/// Sending half, cheap to clone
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sender: mpsc::Sender<RefreshReason>,
}

impl RefreshTrigger {
    /// Request a refresh
    ///
    /// Returns false once the listener has gone away.
    pub fn request(&self, reason: RefreshReason) -> bool {
        self.sender.send(reason).is_ok()
    }
}

/// Receiving half
#[derive(Debug)]
pub struct RefreshListener {
    receiver: mpsc::Receiver<RefreshReason>,
}

impl RefreshListener {
    /// Block until the next request; `None` when every trigger is dropped
    pub fn recv(&self) -> Option<RefreshReason> {
        self.receiver.recv().ok()
    }

    /// Take a pending request without blocking
    pub fn try_recv(&self) -> Option<RefreshReason> {
        self.receiver.try_recv().ok()
    }
}
