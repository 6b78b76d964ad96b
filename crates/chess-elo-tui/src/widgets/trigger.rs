//! Trigger button widget.
//!
//! Triggers are the clickable controls on the header bar. None of them is
//! wired to a destination yet; activation goes through
//! [`ShellApp::activate`](crate::ShellApp::activate) and stops there.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{GlyphMode, Theme};

/// The triggers shown on the header bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Search,
    Admin,
}

impl Trigger {
    /// All triggers in left-to-right order.
    pub const ALL: [Trigger; 2] = [Trigger::Search, Trigger::Admin];

    /// Visible label.
    pub fn label(self) -> &'static str {
        match self {
            Trigger::Search => "Search",
            Trigger::Admin => "Admin",
        }
    }

    /// Keyboard shortcut that activates the trigger.
    pub fn hotkey(self) -> char {
        match self {
            Trigger::Search => 's',
            Trigger::Admin => 'a',
        }
    }

    /// Look up a trigger by its hotkey (case-insensitive).
    pub fn from_hotkey(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.hotkey() == c)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single trigger rendered as a button.
pub struct TriggerButton<'a> {
    trigger: Trigger,
    theme: &'a Theme,
    glyphs: GlyphMode,
}

impl<'a> TriggerButton<'a> {
    /// Create a new trigger button widget.
    pub fn new(trigger: Trigger, theme: &'a Theme) -> Self {
        Self {
            trigger,
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

    /// Columns a trigger occupies in the given glyph mode.
    pub fn width_for(trigger: Trigger, glyphs: GlyphMode) -> u16 {
        let (left, right) = glyphs.trigger_caps();
        let width = left.width() + trigger.label().width() + right.width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

impl Widget for TriggerButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let style = Style::default()
            .bg(self.theme.trigger)
            .fg(self.theme.on_trigger);
        let (left, right) = self.glyphs.trigger_caps();

        buf.set_style(area, style);
        Line::from(vec![
            Span::raw(left),
            Span::raw(self.trigger.label()),
            Span::raw(right),
        ])
        .style(style)
        .render(area, buf);
    }
}
