//! Presentation settings for the shell.
//!
//! Settings are resolved in layers: defaults, an optional JSON file, then the
//! environment (`NO_COLOR`, via [`UiConfig::with_no_color`]). Command-line
//! overrides are applied by the caller.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::theme::{GlyphMode, ThemeName};

/// UI configuration (from defaults, config file and environment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,

    /// Glyph mode (Unicode or ASCII).
    #[serde(default)]
    pub glyphs: GlyphMode,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Shortest accepted poll interval. Lower values are raised to this.
pub const MIN_TICK_RATE_MS: u64 = 16;

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            glyphs: GlyphMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    /// Force ASCII glyphs when `no_color` is set.
    #[must_use]
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.glyphs = GlyphMode::Ascii;
        }
        self
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config.normalized())
    }

    /// Clamp values that would make the event loop misbehave.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.tick_rate_ms = self.tick_rate_ms.max(MIN_TICK_RATE_MS);
        self
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
