//! Transaction registration dialog
//!
//! Modal form with name, amount, type selector and category. Tab moves
//! between fields; on the type row `←`/`→` (or `i`/`e`) pick a side.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::locale::{Locale, LocaleFormat};
use crate::models::TransactionKind;
use crate::refresh::RefreshReason;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::type_selector::{render_selector, TypeSelector};

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Name,
    Amount,
    Type,
    Category,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
        }
    }
}

/// State for the registration form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub type_selector: TypeSelector,
    pub category_input: TextInput,
    pub error_message: Option<String>,
}

impl TransactionFormState {
    pub fn new(format: &LocaleFormat) -> Self {
        let labels = format.labels();
        let amount_hint = match format.locale() {
            Locale::PtBr => "0,00",
            Locale::EnUs => "0.00",
        };
        let mut form = Self {
            focused_field: TransactionField::Name,
            name_input: TextInput::new().label(labels.name_field),
            amount_input: TextInput::new()
                .label(labels.amount_field)
                .placeholder(amount_hint),
            type_selector: TypeSelector::new(),
            category_input: TextInput::new().label(labels.category_field),
            error_message: None,
        };
        form.sync_focus();
        form
    }

    fn sync_focus(&mut self) {
        self.name_input.focused = self.focused_field == TransactionField::Name;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.category_input.focused = self.focused_field == TransactionField::Category;
    }

    pub fn set_focus(&mut self, field: TransactionField) {
        self.focused_field = field;
        self.sync_focus();
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The text input under focus; `None` on the type row
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Name => Some(&mut self.name_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Category => Some(&mut self.category_input),
            TransactionField::Type => None,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Turn the form into service input; only the amount is checked here
    pub fn build_input(&self, format: &LocaleFormat) -> Result<CreateTransactionInput, String> {
        let raw_amount = self.amount_input.value().trim();
        if raw_amount.is_empty() {
            return Err("Amount is required".into());
        }
        let amount = format.parse_input(raw_amount).map_err(|e| e.to_string())?;

        Ok(CreateTransactionInput {
            name: self.name_input.value().to_string(),
            amount,
            kind: self.type_selector.selected(),
            category: self.category_input.value().to_string(),
            occurred_at: None,
        })
    }
}

/// Render the registration dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(56, 14, frame.area());
    frame.render_widget(Clear, area);

    let format = app.format();
    let labels = format.labels();
    let theme = app.theme;

    let block = Block::default()
        .title(format!(" {} ", labels.form_title))
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(3), // Type buttons
            Constraint::Length(1), // Category
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    frame.render_widget(&form.name_input, chunks[0]);
    frame.render_widget(&form.amount_input, chunks[1]);

    if form.focused_field == TransactionField::Type {
        // Marker in the left margin shows the row has focus
        let marker = Rect::new(chunks[2].x.saturating_sub(1), chunks[2].y + 1, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("›", Style::default().fg(Color::Cyan))),
            marker,
        );
    }
    render_selector(
        &theme,
        &form.type_selector,
        labels.income_button,
        labels.expense_button,
        chunks[2],
        frame.buffer_mut(),
    );

    frame.render_widget(&form.category_input, chunks[3]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme.attention),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Type  "),
        Span::styled("[Enter]", Style::default().fg(theme.success)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(theme.attention)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Handle key input for the registration dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }
        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }
        KeyCode::Enter => {
            if let Err(e) = save_transaction(app) {
                app.transaction_form.set_error(e);
            }
            return true;
        }
        _ => {}
    }

    if form.focused_field == TransactionField::Type {
        return handle_type_key(form, key);
    }

    let Some(input) = form.focused_input() else {
        return false;
    };
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    form.clear_error();
    true
}

fn handle_type_key(form: &mut TransactionFormState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('i') | KeyCode::Char('I') => {
            form.type_selector.select(TransactionKind::Income)
        }
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => {
            form.type_selector.select(TransactionKind::Expense)
        }
        KeyCode::Char(' ') => form.type_selector.toggle(),
        _ => return false,
    }
    form.clear_error();
    true
}

/// Store the transaction and ask for a fresh summary
fn save_transaction(app: &mut App) -> Result<(), String> {
    let input = app.transaction_form.build_input(&app.format())?;

    let service = TransactionService::new(app.store, app.settings);
    let record = service
        .register(&app.user, input)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.set_status(format!("Saved \"{}\"", record.name));
    app.request_refresh(RefreshReason::TransactionSaved);
    Ok(())
}
