//! Headless rendering.
//!
//! Renders the shell into an in-memory buffer without touching a terminal,
//! for the `render` command and for tests.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::config::UiConfig;
use crate::layout::AppShell;
use crate::theme::Theme;

/// Default dimensions for headless rendering.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 3;

/// Render the shell into a fresh buffer of the given size.
pub fn render_to_buffer(config: &UiConfig, width: u16, height: u16) -> Buffer {
    let theme = Theme::named(config.theme);
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    AppShell::new(&theme)
        .glyphs(config.glyphs)
        .render(area, &mut buffer);
    buffer
}

/// Render the shell and return its text.
pub fn render_to_string(config: &UiConfig, width: u16, height: u16) -> String {
    buffer_to_string(&render_to_buffer(config, width, height))
}

/// Convert a buffer to plain text, one line per row.
///
/// Trailing spaces are trimmed from each row and the final newline is
/// dropped, so blank rows show up as empty lines.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let symbol = buffer.cell((x, y)).map_or(" ", |cell| cell.symbol());
            result.push_str(symbol);
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GlyphMode;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }

    #[test]
    fn test_render_to_string_default_size() {
        let text = render_to_string(&UiConfig::default(), DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Chess ELO"));
        assert!(lines[1].is_empty());
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_render_is_repeatable() {
        let config = UiConfig::default();
        let first = render_to_buffer(&config, 80, 24);
        for _ in 0..5 {
            assert_eq!(render_to_buffer(&config, 80, 24), first);
        }
    }

    #[test]
    fn test_render_zero_area() {
        assert_eq!(render_to_string(&UiConfig::default(), 0, 0), "");
    }

    #[test]
    fn test_ascii_render() {
        let config = UiConfig {
            glyphs: GlyphMode::Ascii,
            ..UiConfig::default()
        };
        let text = render_to_string(&config, 80, 1);
        assert!(text.ends_with("[Search] [Admin]"));
    }
}
