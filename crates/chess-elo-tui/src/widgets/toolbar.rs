//! Header bar widget.
//!
//! Layout: `␣♟ Chess ELO<spacer......................> Search ␣ Admin ␣`
//!
//! The title is pinned to the left edge, the trigger group to the right edge,
//! and the spacer takes whatever columns remain between them. As the bar
//! narrows the spacer shrinks to a single column, then the title is
//! truncated. The title never touches a trigger: if no column is left to
//! separate them it is dropped. Once the triggers alone no longer fit they
//! start at the left edge in display order and the last one is clipped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::trigger::{Trigger, TriggerButton};
use crate::theme::{GlyphMode, Theme};

/// Header title.
pub const TITLE: &str = "♟ Chess ELO";

/// Columns of padding at each end of the bar.
pub const BAR_PADDING: u16 = 1;

/// Columns between adjacent triggers.
pub const TRIGGER_GAP: u16 = 1;

/// Computed geometry of the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarLayout {
    /// Whole bar row.
    pub bar: Rect,
    /// Title label.
    pub title: Rect,
    /// Flexible spacer between the title and the first trigger.
    pub spacer: Rect,
    /// Trigger buttons in display order.
    pub triggers: [(Trigger, Rect); 2],
}

impl ToolbarLayout {
    /// Lay the bar out in the first row of `area`.
    pub fn compute(area: Rect, glyphs: GlyphMode) -> Self {
        let height = area.height.min(1);
        let bar = Rect::new(area.x, area.y, area.width, height);

        let left = area.x.saturating_add(BAR_PADDING).min(area.right());
        let right = area.right().saturating_sub(BAR_PADDING).max(left);

        let widths = Trigger::ALL.map(|t| TriggerButton::width_for(t, glyphs));
        let gaps = TRIGGER_GAP * (u16::try_from(widths.len()).unwrap_or(u16::MAX) - 1);
        let group = widths.iter().fold(gaps, |sum, w| sum.saturating_add(*w));

        let inner = right - left;
        let (title_width, group_x) = if inner >= group {
            // Keep one spacer column whenever the title is shown.
            let free = inner - group;
            let title_width = u16::try_from(TITLE.width())
                .unwrap_or(u16::MAX)
                .min(free.saturating_sub(1));
            (title_width, right - group)
        } else {
            (0, left)
        };

        let mut cursor = group_x;
        let mut triggers = Trigger::ALL.map(|t| (t, Rect::default()));
        for (i, (slot, width)) in triggers.iter_mut().zip(widths).enumerate() {
            if i > 0 {
                cursor = cursor.saturating_add(TRIGGER_GAP).min(right);
            }
            let width = width.min(right - cursor);
            slot.1 = Rect::new(cursor, area.y, width, height);
            cursor += width;
        }

        let title = Rect::new(left, area.y, title_width, height);
        let spacer_x = left + title_width;
        let spacer = Rect::new(spacer_x, area.y, group_x - spacer_x, height);

        Self {
            bar,
            title,
            spacer,
            triggers,
        }
    }

    /// Trigger under the given terminal cell, if any.
    pub fn trigger_at(&self, column: u16, row: u16) -> Option<Trigger> {
        self.triggers
            .iter()
            .find(|(_, rect)| {
                !rect.is_empty()
                    && row >= rect.y
                    && row < rect.bottom()
                    && column >= rect.x
                    && column < rect.right()
            })
            .map(|(trigger, _)| *trigger)
    }

    /// Rect of a specific trigger.
    pub fn trigger_rect(&self, trigger: Trigger) -> Rect {
        self.triggers
            .iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }
}

/// Header bar widget: title, spacer, triggers on the primary surface.
pub struct Toolbar<'a> {
    theme: &'a Theme,
    glyphs: GlyphMode,
}

impl<'a> Toolbar<'a> {
    /// Create a new header bar widget.
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

    /// Geometry this widget will use for `area`.
    pub fn layout(&self, area: Rect) -> ToolbarLayout {
        ToolbarLayout::compute(area, self.glyphs)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        if layout.bar.is_empty() {
            return;
        }

        let surface = Style::default()
            .bg(self.theme.primary)
            .fg(self.theme.on_primary);
        buf.set_style(layout.bar, surface);

        if !layout.title.is_empty() {
            buf.set_stringn(
                layout.title.x,
                layout.title.y,
                TITLE,
                usize::from(layout.title.width),
                surface.add_modifier(Modifier::BOLD),
            );
        }

        for (trigger, rect) in layout.triggers {
            TriggerButton::new(trigger, self.theme)
                .glyphs(self.glyphs)
                .render(rect, buf);
        }
    }
}
