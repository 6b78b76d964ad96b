//! Theme components for the shell.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`ThemeName`] - Serializable palette selector
//! - [`GlyphMode`] - Unicode decorations with ASCII fallback

mod colors;
mod glyphs;

pub use colors::{Theme, ThemeName};
pub use glyphs::GlyphMode;
