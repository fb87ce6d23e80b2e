//! Event handling for the TUI
//!
//! Terminal input (keys, focus changes, resizes) is read on a dedicated
//! thread and funneled into one channel together with ticks and
//! refresh-completion notices.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::refresh::PassReport;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The terminal window regained focus
    FocusGained,
    FocusLost,
    /// A refresh pass finished
    Refreshed(PassReport),
    /// Periodic redraw
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Start reading terminal events with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let input = sender.clone();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(raw) => {
                            if let Some(event) = translate(raw) {
                                if input.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to read terminal event");
                            return;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!(error = %e, "failed to poll terminal events");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if input.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { sender, receiver }
    }

    /// A sender other threads can use to wake the UI
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        // Windows reports both press and release
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_translate_focus_events() {
        assert!(matches!(
            translate(CrosstermEvent::FocusGained),
            Some(Event::FocusGained)
        ));
        assert!(matches!(
            translate(CrosstermEvent::FocusLost),
            Some(Event::FocusLost)
        ));
    }

    #[test]
    fn test_translate_ignores_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(CrosstermEvent::Key(release)).is_none());

        let press = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(matches!(
            translate(CrosstermEvent::Key(press)),
            Some(Event::Key(_))
        ));
    }
}
