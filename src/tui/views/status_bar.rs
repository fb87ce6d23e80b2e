//! Status bar view
//!
//! Shows refresh state, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::refresh::DashboardState;
use crate::tui::app::App;

const HINTS: &str = " a:Add  r:Refresh  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, state: &DashboardState, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.settings.locale.locale),
        Style::default().fg(Color::Cyan),
    )];

    if app.dashboard.is_refreshing() && !state.is_loading() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            app.format().labels().loading,
            Style::default().fg(app.theme.primary),
        ));
    }

    // A failed refresh over a visible summary is only flagged here
    if let (Some(error), Some(_)) = (state.error(), state.summary()) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            error.to_string(),
            Style::default().fg(app.theme.attention),
        ));
    }

    if let Some(skipped) = state.summary().map(|s| s.skipped.len()).filter(|n| *n > 0) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} skipped", skipped),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
