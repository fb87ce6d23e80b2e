//! Income/expense selector for the registration form
//!
//! Two buttons side by side. The selected one is filled with the light
//! variant of its color and loses its border; the other stays outlined in
//! the neutral text color.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::models::TransactionKind;

use super::super::theme::Theme;

/// How a selector button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStyle {
    /// Outline drawn in the theme's text color
    pub border: bool,
    pub background: Option<Color>,
    /// Icon color
    pub tint: Color,
}

/// Style of one button given its kind and whether it is selected
pub fn visual_style(theme: &Theme, kind: TransactionKind, is_active: bool) -> VisualStyle {
    if !is_active {
        return VisualStyle {
            border: true,
            background: None,
            tint: theme.text,
        };
    }

    let (background, tint) = match kind {
        TransactionKind::Income => (theme.success_light, theme.success),
        TransactionKind::Expense => (theme.attention_light, theme.attention),
    };
    VisualStyle {
        border: false,
        background: Some(background),
        tint,
    }
}

/// Which kind, if any, the form has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeSelector {
    selected: Option<TransactionKind>,
}

impl TypeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<TransactionKind> {
        self.selected
    }

    pub fn is_active(&self, kind: TransactionKind) -> bool {
        self.selected == Some(kind)
    }

    /// Select `kind`, deselecting the other
    pub fn select(&mut self, kind: TransactionKind) {
        self.selected = Some(kind);
    }

    /// Switch sides; with nothing selected, picks income
    pub fn toggle(&mut self) {
        self.selected = Some(match self.selected {
            Some(kind) => kind.opposite(),
            None => TransactionKind::Income,
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// A single selector button
pub struct TypeButton<'a> {
    kind: TransactionKind,
    title: &'a str,
    style: VisualStyle,
    text_color: Color,
    border_color: Color,
}

impl<'a> TypeButton<'a> {
    pub fn new(theme: &Theme, kind: TransactionKind, title: &'a str, is_active: bool) -> Self {
        Self {
            kind,
            title,
            style: visual_style(theme, kind, is_active),
            text_color: theme.title,
            border_color: theme.text,
        }
    }

    fn icon(&self) -> &'static str {
        match self.kind {
            TransactionKind::Income => "↑",
            TransactionKind::Expense => "↓",
        }
    }
}

impl Widget for TypeButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default();
        if self.style.border {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.border_color));
        } else {
            // Keep the content aligned with the outlined button
            block = block.padding(Padding::uniform(1));
        }

        let mut base = Style::default();
        if let Some(bg) = self.style.background {
            base = base.bg(bg);
        }

        let line = Line::from(vec![
            Span::styled(
                self.icon(),
                Style::default()
                    .fg(self.style.tint)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.title, Style::default().fg(self.text_color)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(base)
            .block(block)
            .render(area, buf);
    }
}

/// Render both buttons side by side
pub fn render_selector(
    theme: &Theme,
    selector: &TypeSelector,
    income_title: &str,
    expense_title: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    TypeButton::new(
        theme,
        TransactionKind::Income,
        income_title,
        selector.is_active(TransactionKind::Income),
    )
    .render(halves[0], buf);
    TypeButton::new(
        theme,
        TransactionKind::Expense,
        expense_title,
        selector.is_active(TransactionKind::Expense),
    )
    .render(halves[1], buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_income() {
        let theme = Theme::default();
        let style = visual_style(&theme, TransactionKind::Income, false);
        assert_eq!(
            style,
            VisualStyle {
                border: true,
                background: None,
                tint: theme.text,
            }
        );
    }

    #[test]
    fn test_active_income() {
        let theme = Theme::default();
        let style = visual_style(&theme, TransactionKind::Income, true);
        assert_eq!(
            style,
            VisualStyle {
                border: false,
                background: Some(theme.success_light),
                tint: theme.success,
            }
        );
    }

    #[test]
    fn test_inactive_expense() {
        let theme = Theme::default();
        let style = visual_style(&theme, TransactionKind::Expense, false);
        assert!(style.border);
        assert_eq!(style.background, None);
        assert_eq!(style.tint, theme.text);
    }

    #[test]
    fn test_active_expense() {
        let theme = Theme::default();
        let style = visual_style(&theme, TransactionKind::Expense, true);
        assert!(!style.border);
        assert_eq!(style.background, Some(theme.attention_light));
        assert_eq!(style.tint, theme.attention);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut selector = TypeSelector::new();
        assert_eq!(selector.selected(), None);
        assert!(!selector.is_active(TransactionKind::Income));
        assert!(!selector.is_active(TransactionKind::Expense));

        selector.select(TransactionKind::Income);
        assert!(selector.is_active(TransactionKind::Income));
        assert!(!selector.is_active(TransactionKind::Expense));

        selector.select(TransactionKind::Expense);
        assert!(!selector.is_active(TransactionKind::Income));
        assert!(selector.is_active(TransactionKind::Expense));
    }

    #[test]
    fn test_toggle() {
        let mut selector = TypeSelector::new();
        selector.toggle();
        assert_eq!(selector.selected(), Some(TransactionKind::Income));
        selector.toggle();
        assert_eq!(selector.selected(), Some(TransactionKind::Expense));
        selector.clear();
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn test_active_button_is_filled() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TypeButton::new(&theme, TransactionKind::Income, "Income", true).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, theme.success_light);
        assert_ne!(buf[(0, 0)].symbol(), "╭");
    }

    #[test]
    fn test_inactive_button_is_outlined() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TypeButton::new(&theme, TransactionKind::Expense, "Outcome", false).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(0, 0)].fg, theme.text);
    }
}
