//! chess-elo-tui: Terminal app shell for Chess ELO
//!
//! This crate provides the shell that the Chess ELO features mount into:
//! - Header bar with the title and the Search/Admin triggers
//! - Theme palettes and an ASCII glyph fallback
//! - Headless rendering for scripting and tests

pub mod config;
mod event;
pub mod headless;
pub mod layout;
mod shell;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

pub use config::{ConfigError, UiConfig};
pub use event::{key_to_action, mouse_to_action, Action, Event, EventHandler};
pub use headless::{render_to_buffer, render_to_string};
pub use shell::{run_shell, ShellApp};
pub use theme::{GlyphMode, Theme, ThemeName};
pub use widgets::{Trigger, TITLE};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

/// Errors from the interactive shell entry point.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Terminal setup, drawing or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Settings could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the interactive shell.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit (including on error).
pub async fn run_shell_tui(config: UiConfig) -> Result<(), ShellError> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ShellApp::new(config);
    let result = run_shell(&mut terminal, &mut app).await;

    terminal.show_cursor()?;

    result.map_err(ShellError::from)
}
