//! Test utilities for shell snapshot and render testing.

use crate::shell::ShellApp;
use ratatui::{backend::TestBackend, Terminal};

pub use crate::headless::buffer_to_string;
use crate::headless::render_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Render an app at its current terminal size and return the text.
pub fn render_app_to_string(app: &ShellApp) -> String {
    let (width, height) = app.terminal_size;
    render_to_string(&app.ui_config, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_render_app_to_string_uses_terminal_size() {
        let mut app = ShellApp::default();
        app.handle_resize(50, 2);
        let text = render_app_to_string(&app);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(" ♟ Chess ELO"));
    }
}
