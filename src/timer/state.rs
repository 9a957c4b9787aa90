//! Timer states and per-state command availability.

use serde::{Deserialize, Serialize};

/// State of the session cycle.
///
/// Exactly one state is active at any instant; together with the remaining
/// seconds it fully describes the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// No timer is active.
    Idle,
    /// A focus session is counting down.
    Focus,
    /// A short rest is counting down.
    ShortRest,
    /// A long rest is counting down.
    LongRest,
    /// Rest finished; polling for user activity before the next focus.
    WaitingForUser,
}

impl TimerState {
    /// Check if this state carries an active countdown.
    #[must_use]
    pub const fn is_countdown(self) -> bool {
        matches!(self, Self::Focus | Self::ShortRest | Self::LongRest)
    }

    /// Check if this is one of the rest states.
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::ShortRest | Self::LongRest)
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Focus => "Focus",
            Self::ShortRest => "Short Rest",
            Self::LongRest => "Long Rest",
            Self::WaitingForUser => "Waiting",
        }
    }

    /// Which commands the presentation layer should offer in this state.
    ///
    /// Commands are no-ops when issued in a state that does not offer them,
    /// so this is advisory; it exists so menus can gray out entries without
    /// mutating any state.
    #[must_use]
    pub const fn commands(self) -> CommandSet {
        match self {
            Self::Idle => CommandSet {
                start_focus: true,
                skip_to_rest: false,
                skip_to_focus: false,
                stop: false,
            },
            Self::Focus => CommandSet {
                start_focus: false,
                skip_to_rest: true,
                skip_to_focus: false,
                stop: true,
            },
            Self::ShortRest | Self::LongRest => CommandSet {
                start_focus: false,
                skip_to_rest: false,
                skip_to_focus: true,
                stop: true,
            },
            Self::WaitingForUser => CommandSet {
                start_focus: true,
                skip_to_rest: false,
                skip_to_focus: false,
                stop: true,
            },
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Kind of rest granted after a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestKind {
    /// Regular rest between focus sessions.
    Short,
    /// Earned every Nth completed session.
    Long,
}

/// Menu enablement derived from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    /// "Start Focus" is available.
    pub start_focus: bool,
    /// "Skip to Rest" is available.
    pub skip_to_rest: bool,
    /// "Skip to Focus" is available.
    pub skip_to_focus: bool,
    /// "Stop Timer" is available.
    pub stop: bool,
}

/// Format whole seconds as MM:SS.
///
/// Durations are assumed to stay under an hour; minutes are not rolled
/// over into hours.
#[must_use]
pub fn format_mmss(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
        assert_eq!(format_mmss(59 * 60 + 59), "59:59");
    }

    #[test]
    fn test_is_countdown() {
        assert!(TimerState::Focus.is_countdown());
        assert!(TimerState::ShortRest.is_countdown());
        assert!(TimerState::LongRest.is_countdown());
        assert!(!TimerState::Idle.is_countdown());
        assert!(!TimerState::WaitingForUser.is_countdown());
    }

    #[test]
    fn test_commands_idle() {
        let cmds = TimerState::Idle.commands();
        assert!(cmds.start_focus);
        assert!(!cmds.skip_to_rest);
        assert!(!cmds.skip_to_focus);
        assert!(!cmds.stop);
    }

    #[test]
    fn test_commands_focus() {
        let cmds = TimerState::Focus.commands();
        assert!(!cmds.start_focus);
        assert!(cmds.skip_to_rest);
        assert!(!cmds.skip_to_focus);
        assert!(cmds.stop);
    }

    #[test]
    fn test_commands_rests() {
        for state in [TimerState::ShortRest, TimerState::LongRest] {
            let cmds = state.commands();
            assert!(!cmds.start_focus);
            assert!(!cmds.skip_to_rest);
            assert!(cmds.skip_to_focus);
            assert!(cmds.stop);
        }
    }

    #[test]
    fn test_commands_waiting() {
        let cmds = TimerState::WaitingForUser.commands();
        assert!(cmds.start_focus);
        assert!(!cmds.skip_to_rest);
        assert!(!cmds.skip_to_focus);
        assert!(cmds.stop);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(TimerState::Idle.to_string(), "Idle");
        assert_eq!(TimerState::WaitingForUser.to_string(), "Waiting");
    }
}
