//! Shell application state and main loop.
//!
//! The shell is a single mounted state: it draws the header bar, reacts to
//! quit and resize, and routes trigger activations into [`ShellApp::activate`],
//! which has no destination yet.

use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::event::{key_to_action, mouse_to_action, Action, Event, EventHandler};
use crate::layout::{render_shell, AppShell};
use crate::theme::Theme;
use crate::widgets::{ToolbarLayout, Trigger};

/// Main application state for the shell.
#[derive(Debug)]
pub struct ShellApp {
    /// UI configuration.
    pub ui_config: UiConfig,
    /// Theme colors.
    pub theme: Theme,
    /// Current terminal size.
    pub terminal_size: (u16, u16),
    /// Should the app quit?
    pub should_quit: bool,
}

impl Default for ShellApp {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl ShellApp {
    /// Create a new shell app with the given configuration.
    pub fn new(ui_config: UiConfig) -> Self {
        Self {
            theme: Theme::named(ui_config.theme),
            ui_config,
            terminal_size: (80, 24), // Default, updated on first render
            should_quit: false,
        }
    }

    /// Header geometry for the current terminal size.
    pub fn header_layout(&self) -> ToolbarLayout {
        let (width, height) = self.terminal_size;
        AppShell::new(&self.theme)
            .glyphs(self.ui_config.glyphs)
            .header_layout(Rect::new(0, 0, width, height))
    }

    /// Handle a single input event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_action(key_to_action(*key)),
            Event::Mouse(mouse) => {
                let action = mouse_to_action(*mouse, &self.header_layout());
                self.handle_action(action);
            }
            Event::Resize(width, height) => self.handle_resize(*width, *height),
            Event::Tick => {}
        }
    }

    /// Apply an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Activate(trigger) => self.activate(trigger),
            Action::None => {}
        }
    }

    /// Activate a trigger.
    ///
    /// Neither trigger has a destination, so this only records the activation.
    pub fn activate(&self, trigger: Trigger) {
        debug!(trigger = %trigger, "trigger activated (unwired)");
    }

    /// Handle terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }
}

/// Run the shell main loop until the user quits.
pub async fn run_shell<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ShellApp,
) -> std::io::Result<()> {
    if let Ok(size) = terminal.size() {
        app.terminal_size = (size.width, size.height);
    }

    let mut events = EventHandler::new(app.ui_config.tick_rate_ms);
    info!(
        width = app.terminal_size.0,
        height = app.terminal_size.1,
        theme = %app.ui_config.theme,
        "shell mounted"
    );

    loop {
        terminal.draw(|frame| render_shell(frame, &app.theme, app.ui_config.glyphs))?;

        let Some(event) = events.next().await else {
            break;
        };
        app.handle_event(&event);

        if app.should_quit {
            break;
        }
    }

    info!("shell unmounted");
    Ok(())
}
