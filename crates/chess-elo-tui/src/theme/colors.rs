//! Catppuccin-based color palettes for the shell.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Named palette selectable from config or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// Plain high-contrast palette for accessibility.
    HighContrast,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [Self::Mocha, Self::Latte, Self::HighContrast];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mocha => "mocha",
            Self::Latte => "latte",
            Self::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mocha" | "dark" => Ok(Self::Mocha),
            "latte" | "light" => Ok(Self::Latte),
            "high-contrast" | "high_contrast" | "contrast" => Ok(Self::HighContrast),
            other => Err(format!(
                "unknown theme '{other}' (expected mocha, latte or high-contrast)"
            )),
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Mount area below the header
    pub base: Color,
    pub text: Color,

    // Primary surface (header bar) and the text drawn on it
    pub primary: Color,
    pub on_primary: Color,

    // Trigger buttons sitting on the primary surface
    pub trigger: Color,
    pub on_trigger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            text: Color::Rgb(205, 214, 244), // #cdd6f4

            primary: Color::Rgb(180, 190, 254),  // #b4befe (lavender)
            on_primary: Color::Rgb(17, 17, 27),  // #11111b (crust)

            trigger: Color::Rgb(137, 180, 250),  // #89b4fa (blue)
            on_trigger: Color::Rgb(17, 17, 27),  // #11111b
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245), // #eff1f5
            text: Color::Rgb(76, 79, 105),   // #4c4f69

            primary: Color::Rgb(114, 135, 253),    // #7287fd (lavender)
            on_primary: Color::Rgb(239, 241, 245), // #eff1f5

            trigger: Color::Rgb(30, 102, 245),     // #1e66f5 (blue)
            on_trigger: Color::Rgb(239, 241, 245), // #eff1f5
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            text: Color::White,

            primary: Color::Cyan,
            on_primary: Color::Black,

            trigger: Color::White,
            on_trigger: Color::Black,
        }
    }
}
