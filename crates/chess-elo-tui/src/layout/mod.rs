//! Layout components for the shell.
//!
//! This module provides:
//! - [`AppShell`] - Header bar plus the (empty) mount area below it
//! - [`render_shell`] - Render the shell into a frame

mod shell;

pub use shell::{render_shell, shell_areas, AppShell, HEADER_HEIGHT};
