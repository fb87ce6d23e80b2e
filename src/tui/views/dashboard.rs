//! Dashboard view
//!
//! Greeting header, the three highlight cards and the transaction list.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::locale::Labels;
use crate::models::{AggregateSummary, CardKind, HighlightCard, TransactionKind};
use crate::refresh::DashboardState;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the header with the greeting
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.format().labels();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", labels.greeting),
            Style::default().fg(app.theme.text),
        ),
        Span::styled(
            app.user.to_string(),
            Style::default()
                .fg(app.theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the three cards, or a loading/error notice in their place
pub fn render_cards(frame: &mut Frame, app: &App, state: &DashboardState, areas: [Rect; 3]) {
    let labels = app.format().labels();

    let Some(summary) = state.summary() else {
        let (text, color) = match state.error() {
            Some(message) => (message.to_string(), app.theme.attention),
            None => (labels.loading.to_string(), app.theme.primary),
        };
        let area = Rect {
            width: areas.iter().map(|a| a.width).sum(),
            ..areas[0]
        };
        let notice = Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, area);
        return;
    };

    for ((kind, card), area) in summary.cards().into_iter().zip(areas) {
        render_card(frame, &app.theme, labels, kind, card, area);
    }
}

fn card_title(labels: &Labels, kind: CardKind) -> &'static str {
    match kind {
        CardKind::Income => labels.income_card,
        CardKind::Expense => labels.expense_card,
        CardKind::Total => labels.total_card,
    }
}

fn card_style(theme: &Theme, kind: CardKind) -> (Color, &'static str) {
    match kind {
        CardKind::Income => (theme.success, "↑"),
        CardKind::Expense => (theme.attention, "↓"),
        CardKind::Total => (theme.secondary, "$"),
    }
}

fn render_card(
    frame: &mut Frame,
    theme: &Theme,
    labels: &Labels,
    kind: CardKind,
    card: &HighlightCard,
    area: Rect,
) {
    let (accent, icon) = card_style(theme, kind);
    let block = Block::default()
        .title_top(Line::from(vec![
            Span::raw(" "),
            Span::styled(card_title(labels, kind), Style::default().fg(theme.title)),
            Span::raw(" "),
        ]))
        .title_top(
            Line::from(Span::styled(format!(" {} ", icon), Style::default().fg(accent)))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(Span::styled(
            card.amount.as_str(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            card.last_transaction.as_str(),
            Style::default().fg(theme.text),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the transaction list
pub fn render_list(frame: &mut Frame, app: &App, summary: Option<&AggregateSummary>, area: Rect) {
    let format = app.format();
    let labels = format.labels();
    let theme = &app.theme;

    let mut title = format!(" {} ", labels.list_title);
    if app.dashboard.is_refreshing() {
        title.push_str("⟳ ");
    }
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let transactions = summary.map(|s| s.transactions.as_slice()).unwrap_or(&[]);
    if transactions.is_empty() {
        let text = if summary.is_some() {
            labels.empty_bucket
        } else {
            ""
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(theme.text));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let (amount, color) = match txn.kind {
                TransactionKind::Income => (txn.amount.clone(), theme.success),
                TransactionKind::Expense => (format!("- {}", txn.amount), theme.attention),
            };
            Row::new(vec![
                Cell::from(txn.name.as_str()).style(Style::default().fg(theme.title)),
                Cell::from(amount).style(Style::default().fg(color)),
                Cell::from(txn.category.as_str()).style(Style::default().fg(theme.text)),
                Cell::from(txn.date.as_str()).style(Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_transaction_index.min(transactions.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
