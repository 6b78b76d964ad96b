//! Event handling for the shell.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::MIN_TICK_RATE_MS;
use crate::widgets::{ToolbarLayout, Trigger};

/// Events that can occur in the shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

/// Poll interval for a tick rate, never shorter than [`MIN_TICK_RATE_MS`].
fn poll_interval(tick_rate_ms: u64) -> Duration {
    Duration::from_millis(tick_rate_ms.max(MIN_TICK_RATE_MS))
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling is blocking, so it gets its own thread
        std::thread::spawn(move || {
            let tick_rate = poll_interval(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Action the shell can perform in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// A trigger was clicked or its hotkey pressed.
    Activate(Trigger),
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    // Ignore key release/repeat reports (Windows sends both press and release)
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => Trigger::from_hotkey(c).map_or(Action::None, Action::Activate),
        _ => Action::None,
    }
}

/// Convert a mouse event to an action by hit-testing the header bar.
pub fn mouse_to_action(mouse: MouseEvent, header: &ToolbarLayout) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => header
            .trigger_at(mouse.column, mouse.row)
            .map_or(Action::None, Action::Activate),
        _ => Action::None,
    }
}
