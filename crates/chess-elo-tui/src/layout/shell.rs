//! Main shell layout with 2 regions.
//!
//! Regions:
//! 1. Header bar (top, 1 line)
//! 2. Mount area (rest of the screen, empty until features are mounted)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Widget,
    Frame,
};

use crate::{
    theme::{GlyphMode, Theme},
    widgets::{Toolbar, ToolbarLayout},
};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 1;

/// Split the screen into header and mount area.
pub fn shell_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header bar
            Constraint::Min(0),                // Mount area (expands)
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// The whole application shell.
///
/// Rendering is a pure function of the area, theme and glyph mode.
pub struct AppShell<'a> {
    theme: &'a Theme,
    glyphs: GlyphMode,
}

impl<'a> AppShell<'a> {
    /// Create a new shell widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            glyphs: GlyphMode::default(),
        }
    }

    /// Set glyph mode.
    #[must_use]
    pub fn glyphs(mut self, glyphs: GlyphMode) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Header geometry for a full-screen `area`.
    pub fn header_layout(&self, area: Rect) -> ToolbarLayout {
        let (header, _) = shell_areas(area);
        Toolbar::new(self.theme).glyphs(self.glyphs).layout(header)
    }
}

impl Widget for AppShell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (header, body) = shell_areas(area);

        Toolbar::new(self.theme)
            .glyphs(self.glyphs)
            .render(header, buf);

        buf.set_style(
            body,
            Style::default().bg(self.theme.base).fg(self.theme.text),
        );
    }
}

/// Render the shell to fill the frame.
pub fn render_shell(frame: &mut Frame<'_>, theme: &Theme, glyphs: GlyphMode) {
    let area = frame.area();
    frame.render_widget(AppShell::new(theme).glyphs(glyphs), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_terminal_sized;

    #[test]
    fn test_shell_areas() {
        let (header, body) = shell_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(body, Rect::new(0, 1, 80, 23));
    }

    #[test]
    fn test_single_row_has_no_body() {
        let (header, body) = shell_areas(Rect::new(0, 0, 80, 1));
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn test_render_shell_fills_body_with_base() {
        let theme = Theme::default();
        let mut terminal = create_test_terminal_sized(30, 4);
        terminal
            .draw(|frame| render_shell(frame, &theme, GlyphMode::Unicode))
            .unwrap();

        let buf = terminal.backend().buffer();
        for y in 1..4 {
            for x in 0..30 {
                assert_eq!(buf[(x, y)].bg, theme.base);
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
    }

    #[test]
    fn test_header_layout_matches_toolbar() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let shell = AppShell::new(&theme).glyphs(GlyphMode::Ascii);
        let expected = ToolbarLayout::compute(Rect::new(0, 0, 80, 1), GlyphMode::Ascii);
        assert_eq!(shell.header_layout(area), expected);
    }
}
