//! UI widgets for the shell.
//!
//! This module provides:
//! - [`Toolbar`] - Header bar with title, spacer and triggers
//! - [`TriggerButton`] - A single button-styled trigger
//! - [`ToolbarLayout`] - Computed header geometry for hit-testing

mod toolbar;
mod trigger;

pub use toolbar::{Toolbar, ToolbarLayout, BAR_PADDING, TITLE, TRIGGER_GAP};
pub use trigger::{Trigger, TriggerButton};
