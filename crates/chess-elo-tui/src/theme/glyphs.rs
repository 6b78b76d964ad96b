//! Glyph modes: Unicode decorations or an ASCII fallback.
//!
//! ASCII mode is also selected when `NO_COLOR` is set, since buttons then
//! need visible brackets instead of a colored background.

use serde::{Deserialize, Serialize};

/// Glyph mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphMode {
    /// Colored button backgrounds, no brackets.
    #[default]
    Unicode,
    /// Bracketed buttons, readable without color.
    Ascii,
}

impl GlyphMode {
    /// Left and right decorations drawn around a trigger label.
    pub fn trigger_caps(self) -> (&'static str, &'static str) {
        match self {
            GlyphMode::Unicode => (" ", " "),
            GlyphMode::Ascii => ("[", "]"),
        }
    }
}
