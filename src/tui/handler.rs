//! Event handler for the TUI
//!
//! Routes terminal events to the dashboard or the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use crate::refresh::{PublishOutcome, RefreshReason};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::FocusGained => {
            app.request_refresh(RefreshReason::FocusRegained);
            Ok(())
        }
        Event::Refreshed(report) => {
            debug!(reason = %report.reason, outcome = ?report.outcome, "refresh finished");
            if report.outcome == PublishOutcome::Applied {
                app.clamp_selection();
            }
            Ok(())
        }
        Event::FocusLost | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
    Ok(())
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    let count = app.transaction_count();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddTransaction);
        }
        KeyCode::Char('r') | KeyCode::F(5) => {
            app.clear_status();
            app.request_refresh(RefreshReason::Manual);
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_transaction_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_transaction_index = count.saturating_sub(1)
        }
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::UserId;
    use crate::refresh::{refresh_channel, refresh_now, DashboardCell, RefreshListener};
    use crate::storage::MemoryStore;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn with_app(store: &MemoryStore, test: impl FnOnce(&mut App, &RefreshListener)) {
        let settings = Settings::default();
        let user = UserId::parse("1").unwrap();
        let cell = DashboardCell::new();
        refresh_now(store, &settings, &user, &cell);
        let (trigger, listener) = refresh_channel();
        let mut app = App::new(store, &settings, user, cell, trigger);
        test(&mut app, &listener);
    }

    #[test]
    fn test_focus_gained_requests_refresh() {
        with_app(&MemoryStore::new(), |app, listener| {
            handle_event(app, Event::FocusGained).unwrap();
            assert_eq!(listener.try_recv(), Some(RefreshReason::FocusRegained));

            handle_event(app, Event::FocusLost).unwrap();
            assert_eq!(listener.try_recv(), None);
        });
    }

    #[test]
    fn test_r_requests_manual_refresh() {
        with_app(&MemoryStore::new(), |app, listener| {
            press(app, KeyCode::Char('r'));
            assert_eq!(listener.try_recv(), Some(RefreshReason::Manual));
        });
    }

    #[test]
    fn test_dialog_keys() {
        with_app(&MemoryStore::new(), |app, listener| {
            press(app, KeyCode::Char('?'));
            assert_eq!(app.active_dialog, ActiveDialog::Help);
            press(app, KeyCode::Char('x'));
            assert!(!app.has_dialog());

            press(app, KeyCode::Char('a'));
            assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
            // Typed into the form, not treated as refresh or quit
            press(app, KeyCode::Char('r'));
            press(app, KeyCode::Char('q'));
            assert!(!app.should_quit);
            assert_eq!(listener.try_recv(), None);
            assert_eq!(app.transaction_form.name_input.value(), "rq");
        });
    }

    #[test]
    fn test_selection_bounds() {
        let store = MemoryStore::with_item(
            "@gofinances:transactions_user:1",
            r#"[
                {"id":"1","name":"A","amount":"1","type":"positive","category":"c","date":"2024-01-01"},
                {"id":"2","name":"B","amount":"2","type":"negative","category":"c","date":"2024-01-02"}
            ]"#,
        );
        with_app(&store, |app, _| {
            press(app, KeyCode::Char('j'));
            press(app, KeyCode::Char('j'));
            assert_eq!(app.selected_transaction_index, 1);
            press(app, KeyCode::Char('k'));
            press(app, KeyCode::Char('k'));
            assert_eq!(app.selected_transaction_index, 0);
            press(app, KeyCode::Char('G'));
            assert_eq!(app.selected_transaction_index, 1);
        });
    }

    #[test]
    fn test_quit() {
        with_app(&MemoryStore::new(), |app, _| {
            press(app, KeyCode::Char('q'));
            assert!(app.should_quit);
        });
    }
}
