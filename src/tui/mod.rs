//! Terminal user interface for pomobar.
//!
//! Renders the timer read model and forwards key presses to the session
//! controller. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomobarError;
use crate::platform::Autostart;
use crate::timer::SessionController;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(controller: &SessionController, autostart: &dyn Autostart) -> Result<(), PomobarError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomobarError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomobarError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomobarError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(controller, autostart);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), PomobarError> {
    loop {
        // The countdown advances on its own thread; pick up its progress.
        app.refresh();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomobarError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => {
                    app.shutdown();
                    break;
                }
                event::Action::StartFocus => app.start_focus(),
                event::Action::Skip => app.skip(),
                event::Action::Stop => app.stop(),
                event::Action::ToggleAutostart => app.toggle_autostart(),
            }
        }
    }

    Ok(())
}
