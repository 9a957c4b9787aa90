//! Application state for the TUI.

use crate::platform::Autostart;
use crate::timer::{SessionController, Snapshot};

/// Application state.
pub struct App<'a> {
    /// The timer behind this UI.
    controller: &'a SessionController,
    /// Login-item registration, toggled from the UI.
    autostart: &'a dyn Autostart,
    /// Latest read model from the controller.
    pub snapshot: Snapshot,
    /// Whether launch-at-login is currently registered.
    pub autostart_enabled: bool,
    /// Status message to display.
    pub status: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    pub fn new(controller: &'a SessionController, autostart: &'a dyn Autostart) -> Self {
        Self {
            snapshot: controller.snapshot(),
            autostart_enabled: autostart.is_enabled(),
            controller,
            autostart,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Pull the latest read model from the controller.
    pub fn refresh(&mut self) {
        self.snapshot = self.controller.snapshot();
    }

    /// Start a focus session (no-op unless the state offers it).
    pub fn start_focus(&mut self) {
        if self.snapshot.state.commands().start_focus {
            self.controller.start_focus();
            self.status = Some("Focus session started".to_string());
        }
        self.refresh();
    }

    /// Skip to rest or to focus, whichever the state offers.
    pub fn skip(&mut self) {
        let cmds = self.snapshot.state.commands();
        if cmds.skip_to_rest {
            self.controller.skip_to_rest();
            self.status = Some("Skipped to rest".to_string());
        } else if cmds.skip_to_focus {
            self.controller.skip_to_focus();
            self.status = Some("Skipped to focus".to_string());
        }
        self.refresh();
    }

    /// Stop the timer.
    pub fn stop(&mut self) {
        if self.snapshot.state.commands().stop {
            self.controller.stop();
            self.status = Some("Timer stopped".to_string());
        }
        self.refresh();
    }

    /// Toggle launch-at-login registration.
    pub fn toggle_autostart(&mut self) {
        let result = if self.autostart.is_enabled() {
            self.autostart.disable()
        } else {
            self.autostart.enable()
        };

        match result {
            Ok(()) => {
                self.autostart_enabled = self.autostart.is_enabled();
                self.status = Some(if self.autostart_enabled {
                    "Auto-start enabled".to_string()
                } else {
                    "Auto-start disabled".to_string()
                });
            }
            Err(e) => {
                self.status = Some(format!("Auto-start error: {e}"));
            }
        }
    }

    /// Stop the timer before the UI goes away.
    pub fn shutdown(&self) {
        self.controller.stop();
    }
}
