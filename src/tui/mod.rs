//! Terminal User Interface module
//!
//! The interactive dashboard built with ratatui: greeting header, highlight
//! cards, transaction list and a registration dialog. Refreshes run on a
//! background worker and are triggered by focus changes, saves, or `r`.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
pub use theme::Theme;
