//! TUI Views module
//!
//! The dashboard and status bar, with dialogs drawn on top.

pub mod dashboard;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());
    let state = app.dashboard_state();

    dashboard::render_header(frame, app, layout.header);
    dashboard::render_cards(frame, app, &state, layout.cards);
    dashboard::render_list(frame, app, state.summary(), layout.list);
    status_bar::render(frame, app, &state, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
