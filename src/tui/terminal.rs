//! Terminal setup and teardown
//!
//! Handles entering and leaving raw mode and the alternate screen, focus
//! reporting, and the panic hook that restores the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::models::UserId;
use crate::refresh::{refresh_channel, DashboardCell, RefreshReason, RefreshWorker};
use crate::storage::KeyValueStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui(store: Arc<dyn KeyValueStore>, settings: &Settings, user: UserId) -> Result<()> {
    let mut terminal = init_terminal()?;

    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    let cell = DashboardCell::new();
    let (trigger, listener) = refresh_channel();

    let wake = events.sender();
    let worker = RefreshWorker::spawn(
        Arc::clone(&store),
        settings.clone(),
        user.clone(),
        cell.clone(),
        listener,
        move |report| {
            let _ = wake.send(Event::Refreshed(report));
        },
    );

    let mut app = App::new(store.as_ref(), settings, user, cell, trigger);
    info!(user = %app.user, "dashboard opened");
    app.request_refresh(RefreshReason::InitialLoad);

    let result = event_loop(&mut terminal, &events, &mut app);

    // Dropping the app drops the last trigger, which stops the worker
    drop(app);
    worker.join();

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, events: &EventHandler, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
