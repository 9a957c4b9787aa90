//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::timer::TimerState;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Create layout: header, timer body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header with the tray-style title.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let header = Paragraph::new(format!(" {} ", app.snapshot.title()))
        .style(
            Style::default()
                .fg(state_color(app.snapshot.state))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state_color(app.snapshot.state)))
                .title(" pomobar "),
        );

    frame.render_widget(header, area);
}

/// Render the timer body.
fn render_timer(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let snapshot = &app.snapshot;
    let cmds = snapshot.state.commands();

    let time_line = if snapshot.state.is_countdown() {
        Line::from(Span::styled(
            snapshot.time_remaining.clone(),
            Style::default()
                .fg(state_color(snapshot.state))
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            match snapshot.state {
                TimerState::WaitingForUser => "move the mouse or press a key to resume",
                _ => "press s to start a focus session",
            },
            Style::default().fg(Color::DarkGray),
        ))
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            snapshot.state.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        time_line,
        Line::default(),
        Line::from(format!("Sessions today: {}", snapshot.sessions_today)),
        Line::from(Span::styled(
            format!(
                "Start at login: {}",
                if app.autostart_enabled { "on" } else { "off" }
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    // Offer only the commands valid in this state.
    let mut keys = Vec::new();
    if cmds.start_focus {
        keys.push("s: start focus");
    }
    if cmds.skip_to_rest {
        keys.push("k: skip to rest");
    }
    if cmds.skip_to_focus {
        keys.push("k: skip to focus");
    }
    if cmds.stop {
        keys.push("x: stop");
    }
    keys.push("q: quit");
    lines.push(Line::from(Span::styled(
        keys.join("   "),
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status = app.status.as_deref().unwrap_or("");
    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

const fn state_color(state: TimerState) -> Color {
    match state {
        TimerState::Focus => Color::Red,
        TimerState::ShortRest | TimerState::LongRest => Color::Green,
        TimerState::WaitingForUser => Color::Yellow,
        TimerState::Idle => Color::Cyan,
    }
}
