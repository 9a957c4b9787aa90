//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::PomobarError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start a focus session.
    StartFocus,
    /// Skip to rest or to focus, depending on state.
    Skip,
    /// Stop the timer.
    Stop,
    /// Toggle launch-at-login.
    ToggleAutostart,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, PomobarError> {
    // Poll with a short timeout so the countdown stays visually smooth
    if event::poll(Duration::from_millis(200))
        .map_err(|e| PomobarError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomobarError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => {
                    return Ok(Some(Action::Quit));
                }

                // Timer commands
                KeyCode::Char('s') | KeyCode::Enter => {
                    return Ok(Some(Action::StartFocus));
                }
                KeyCode::Char('k') => {
                    return Ok(Some(Action::Skip));
                }
                KeyCode::Char('x') => {
                    return Ok(Some(Action::Stop));
                }

                // Settings
                KeyCode::Char('a') => {
                    return Ok(Some(Action::ToggleAutostart));
                }

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "s:start focus | k:skip | x:stop | a:auto-start | q:quit".to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
