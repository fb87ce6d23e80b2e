//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The dashboard summary itself lives in a [`DashboardCell`] shared with the
//! refresh worker.

use crate::config::Settings;
use crate::locale::LocaleFormat;
use crate::models::UserId;
use crate::refresh::{DashboardCell, DashboardState, RefreshReason, RefreshTrigger};
use crate::storage::KeyValueStore;

use super::dialogs::transaction::TransactionFormState;
use super::theme::Theme;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    Help,
}

/// Main application state
pub struct App<'a> {
    pub store: &'a dyn KeyValueStore,
    pub settings: &'a Settings,
    pub user: UserId,
    pub theme: Theme,

    /// Shared with the refresh worker
    pub dashboard: DashboardCell,
    trigger: RefreshTrigger,

    pub should_quit: bool,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    /// Selected row in the transaction list
    pub selected_transaction_index: usize,

    pub status_message: Option<String>,

    pub transaction_form: TransactionFormState,
}

impl<'a> App<'a> {
    pub fn new(
        store: &'a dyn KeyValueStore,
        settings: &'a Settings,
        user: UserId,
        dashboard: DashboardCell,
        trigger: RefreshTrigger,
    ) -> Self {
        let format = settings.locale_format();
        Self {
            store,
            settings,
            user,
            theme: Theme::default(),
            dashboard,
            trigger,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_transaction_index: 0,
            status_message: None,
            transaction_form: TransactionFormState::new(&format),
        }
    }

    pub fn format(&self) -> LocaleFormat {
        self.settings.locale_format()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Ask the worker for a fresh summary
    pub fn request_refresh(&mut self, reason: RefreshReason) {
        if !self.trigger.request(reason) {
            self.set_status("Refresh unavailable");
        }
    }

    /// Current dashboard state
    pub fn dashboard_state(&self) -> DashboardState {
        self.dashboard.snapshot()
    }

    pub fn transaction_count(&self) -> usize {
        self.dashboard
            .snapshot()
            .summary()
            .map(|s| s.transactions.len())
            .unwrap_or(0)
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form = TransactionFormState::new(&self.format());
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn move_up(&mut self) {
        self.selected_transaction_index = self.selected_transaction_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, max: usize) {
        if self.selected_transaction_index < max.saturating_sub(1) {
            self.selected_transaction_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks or grows
    pub fn clamp_selection(&mut self) {
        let count = self.transaction_count();
        self.selected_transaction_index = self
            .selected_transaction_index
            .min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::refresh_channel;
    use crate::storage::MemoryStore;

    #[test]
    fn test_refresh_request_reaches_listener() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let (trigger, listener) = refresh_channel();
        let mut app = App::new(
            &store,
            &settings,
            UserId::parse("1").unwrap(),
            DashboardCell::new(),
            trigger,
        );

        app.request_refresh(RefreshReason::Manual);
        assert_eq!(listener.try_recv(), Some(RefreshReason::Manual));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_refresh_without_listener_sets_status() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let (trigger, listener) = refresh_channel();
        drop(listener);
        let mut app = App::new(
            &store,
            &settings,
            UserId::parse("1").unwrap(),
            DashboardCell::new(),
            trigger,
        );

        app.request_refresh(RefreshReason::Manual);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_dialog_modes() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let (trigger, _listener) = refresh_channel();
        let mut app = App::new(
            &store,
            &settings,
            UserId::parse("1").unwrap(),
            DashboardCell::new(),
            trigger,
        );

        app.open_dialog(ActiveDialog::AddTransaction);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.has_dialog());

        app.close_dialog();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.has_dialog());
    }
}
