//! The session state machine.
//!
//! `TimerEngine` owns the full Pomodoro cycle: focus counts down into a
//! short or long rest, rest counts down into waiting-for-user, and user
//! activity starts the next focus session. Every command is a total
//! function of the current state; commands that do not apply are no-ops,
//! never errors.

use std::time::Duration;

use crate::config::TimerConfig;
use crate::platform::{IdleProbe, Notifier};
use crate::timer::messages::{MessagePicker, INSPIRATIONAL_MESSAGES};
use crate::timer::state::{format_mmss, RestKind, TimerState};

/// Seconds of recent input that count as "the user is back".
const ACTIVITY_THRESHOLD_SECS: f64 = 3.0;

/// Planned durations, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Focus session length.
    pub focus: u64,
    /// Short rest length.
    pub short_rest: u64,
    /// Long rest length.
    pub long_rest: u64,
    /// Every Nth completed focus session earns a long rest.
    pub sessions_until_long_rest: u32,
}

impl From<&TimerConfig> for Durations {
    fn from(config: &TimerConfig) -> Self {
        Self {
            focus: config.focus_duration().num_seconds().unsigned_abs(),
            short_rest: config.short_rest_duration().num_seconds().unsigned_abs(),
            long_rest: config.long_rest_duration().num_seconds().unsigned_abs(),
            sessions_until_long_rest: config.sessions_until_long_rest,
        }
    }
}

/// Read model handed to the presentation layer after every tick and
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current state.
    pub state: TimerState,
    /// Remaining time, formatted MM:SS.
    pub time_remaining: String,
    /// Focus sessions completed today.
    pub sessions_today: u32,
    /// Lifetime focus completions (process-scoped).
    pub completed_sessions: u32,
}

impl Snapshot {
    /// Tray-style title line for the current state.
    #[must_use]
    pub fn title(&self) -> String {
        match self.state {
            TimerState::Idle => "🍅 Ready".to_string(),
            TimerState::Focus => format!("🍅 {}", self.time_remaining),
            TimerState::ShortRest | TimerState::LongRest => {
                format!("☕ {}", self.time_remaining)
            }
            TimerState::WaitingForUser => "🍅 Waiting...".to_string(),
        }
    }
}

/// The Pomodoro state machine.
///
/// Collaborators are injected: a notifier for transition announcements, an
/// idle probe polled while waiting for the user, and a message picker for
/// the focus notification.
pub struct TimerEngine {
    durations: Durations,
    state: TimerState,
    time_remaining: u64,
    completed_sessions: u32,
    sessions_today: u32,
    running: bool,
    notifier: Box<dyn Notifier>,
    idle: Box<dyn IdleProbe>,
    picker: Box<dyn MessagePicker>,
}

impl TimerEngine {
    /// Create an idle engine with the given durations and collaborators.
    #[must_use]
    pub fn new(
        durations: Durations,
        notifier: Box<dyn Notifier>,
        idle: Box<dyn IdleProbe>,
        picker: Box<dyn MessagePicker>,
    ) -> Self {
        Self {
            durations: Durations {
                // A zero threshold would make every modulo test divide by
                // zero; treat it as "every session is a long rest".
                sessions_until_long_rest: durations.sessions_until_long_rest.max(1),
                ..durations
            },
            state: TimerState::Idle,
            time_remaining: 0,
            completed_sessions: 0,
            sessions_today: 0,
            running: false,
            notifier,
            idle,
            picker,
        }
    }

    /// Start a focus session.
    ///
    /// No-op unless the timer is idle or waiting for the user.
    pub fn start_focus(&mut self) {
        if !matches!(self.state, TimerState::Idle | TimerState::WaitingForUser) {
            return;
        }
        self.begin_focus();
    }

    /// Skip the current focus session straight to its rest.
    ///
    /// Grants the rest the session would have earned on completion, but
    /// does not count the session as completed.
    pub fn skip_to_rest(&mut self) {
        if self.state != TimerState::Focus {
            return;
        }
        let kind = self.rest_kind_for(self.completed_sessions + 1);
        self.begin_rest(kind);
    }

    /// Skip the current rest straight to the next focus session.
    pub fn skip_to_focus(&mut self) {
        if !self.state.is_rest() {
            return;
        }
        self.begin_focus();
    }

    /// Stop the timer and return to idle.
    pub fn stop(&mut self) {
        self.running = false;
        self.state = TimerState::Idle;
        self.time_remaining = 0;
    }

    /// Advance the machine by one tick (nominally one second).
    ///
    /// In countdown states this decrements the remaining time and fires
    /// the follow-on transition on the tick that reaches zero. While
    /// waiting for the user it polls the idle probe instead.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        match self.state {
            TimerState::Focus => {
                if self.time_remaining > 0 {
                    self.time_remaining -= 1;
                }
                if self.time_remaining == 0 {
                    self.complete_focus();
                }
            }
            TimerState::ShortRest | TimerState::LongRest => {
                if self.time_remaining > 0 {
                    self.time_remaining -= 1;
                }
                if self.time_remaining == 0 {
                    self.enter_waiting();
                }
            }
            TimerState::WaitingForUser => {
                if self.idle.idle_seconds() < ACTIVITY_THRESHOLD_SECS {
                    self.begin_focus();
                }
            }
            TimerState::Idle => {}
        }
    }

    /// How long the ticker should wait before the next tick.
    ///
    /// One second while counting down, half a second while polling for the
    /// user so `stop` stays responsive.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        if self.state.is_countdown() {
            Duration::from_secs(1)
        } else {
            Duration::from_millis(500)
        }
    }

    /// Check if the countdown loop should keep advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Get the read model for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            time_remaining: format_mmss(self.time_remaining),
            sessions_today: self.sessions_today,
            completed_sessions: self.completed_sessions,
        }
    }

    fn begin_focus(&mut self) {
        self.state = TimerState::Focus;
        self.time_remaining = self.durations.focus;
        self.running = true;

        let minutes = self.durations.focus / 60;
        let message = self.picker.pick(INSPIRATIONAL_MESSAGES);
        self.notifier.notify(
            "Focus Time! 🎯",
            &format!("{minutes} minutes of deep work. {message}"),
        );
    }

    fn begin_rest(&mut self, kind: RestKind) {
        let (state, secs, label) = match kind {
            RestKind::Short => (TimerState::ShortRest, self.durations.short_rest, "Short Break"),
            RestKind::Long => (TimerState::LongRest, self.durations.long_rest, "Long Break"),
        };
        self.state = state;
        self.time_remaining = secs;
        self.running = true;

        let minutes = secs / 60;
        self.notifier.notify(
            &format!("{label}! ☕"),
            &format!("Take {minutes} minutes to relax. You've earned it!"),
        );
    }

    fn complete_focus(&mut self) {
        self.completed_sessions += 1;
        self.sessions_today += 1;
        let kind = self.rest_kind_for(self.completed_sessions);
        self.begin_rest(kind);
    }

    fn enter_waiting(&mut self) {
        self.state = TimerState::WaitingForUser;
        self.notifier.notify(
            "Ready to focus? 🍅",
            "Move your mouse or press a key to start the next focus session.",
        );
    }

    /// Rest type earned by the given (1-based) session number.
    const fn rest_kind_for(&self, session_number: u32) -> RestKind {
        if session_number % self.durations.sessions_until_long_rest == 0 {
            RestKind::Long
        } else {
            RestKind::Short
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockIdleProbe, MockNotifier};
    use crate::timer::messages::MockMessagePicker;

    fn durations(focus: u64, short: u64, long: u64, threshold: u32) -> Durations {
        Durations {
            focus,
            short_rest: short,
            long_rest: long,
            sessions_until_long_rest: threshold,
        }
    }

    fn quiet_notifier() -> Box<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_, _| ());
        Box::new(notifier)
    }

    fn away_probe() -> Box<MockIdleProbe> {
        let mut probe = MockIdleProbe::new();
        probe.expect_idle_seconds().returning(|| f64::MAX);
        Box::new(probe)
    }

    fn fixed_picker() -> Box<MockMessagePicker> {
        let mut picker = MockMessagePicker::new();
        picker.expect_pick().returning(|_| "Test message");
        Box::new(picker)
    }

    fn engine(d: Durations) -> TimerEngine {
        TimerEngine::new(d, quiet_notifier(), away_probe(), fixed_picker())
    }

    fn engine_with_probe(d: Durations, probe: MockIdleProbe) -> TimerEngine {
        TimerEngine::new(d, quiet_notifier(), Box::new(probe), fixed_picker())
    }

    /// Run one focus session to completion via ticks.
    fn complete_focus_session(e: &mut TimerEngine, focus_secs: u64) {
        assert_eq!(e.state(), TimerState::Focus);
        for _ in 0..focus_secs {
            e.tick();
        }
        assert!(e.state().is_rest());
    }

    #[test]
    fn test_initial_state() {
        let e = engine(durations(4, 2, 3, 4));
        assert_eq!(e.state(), TimerState::Idle);
        assert!(!e.is_running());
        assert_eq!(e.snapshot().time_remaining, "00:00");
    }

    #[test]
    fn test_start_focus_begins_countdown() {
        let mut e = engine(durations(120, 2, 3, 4));
        e.start_focus();
        assert_eq!(e.state(), TimerState::Focus);
        assert!(e.is_running());
        assert_eq!(e.snapshot().time_remaining, "02:00");
    }

    #[test]
    fn test_tick_decrements_by_exactly_one() {
        let mut e = engine(durations(120, 2, 3, 4));
        e.start_focus();
        e.tick();
        assert_eq!(e.snapshot().time_remaining, "01:59");
        e.tick();
        assert_eq!(e.snapshot().time_remaining, "01:58");
    }

    #[test]
    fn test_tick_in_idle_is_noop() {
        let mut e = engine(durations(4, 2, 3, 4));
        e.tick();
        assert_eq!(e.state(), TimerState::Idle);
        assert_eq!(e.snapshot().time_remaining, "00:00");
    }

    #[test]
    fn test_focus_completes_into_short_rest() {
        let mut e = engine(durations(2, 5, 9, 4));
        e.start_focus();
        e.tick();
        assert_eq!(e.state(), TimerState::Focus);
        e.tick();
        // Transition fires on the tick that reaches zero.
        assert_eq!(e.state(), TimerState::ShortRest);
        assert_eq!(e.snapshot().completed_sessions, 1);
        assert_eq!(e.snapshot().sessions_today, 1);
        assert_eq!(e.snapshot().time_remaining, "00:05");
    }

    #[test]
    fn test_every_nth_completion_is_long_rest() {
        let threshold = 2;
        let mut e = engine(durations(1, 1, 1, threshold));
        e.start_focus();

        for n in 1..=6u32 {
            complete_focus_session(&mut e, 1);
            let expected = if n % threshold == 0 {
                TimerState::LongRest
            } else {
                TimerState::ShortRest
            };
            assert_eq!(e.state(), expected, "session {n}");
            assert_eq!(e.snapshot().completed_sessions, n);
            e.skip_to_focus();
        }
    }

    #[test]
    fn test_rest_completes_into_waiting() {
        let mut e = engine(durations(1, 2, 9, 4));
        e.start_focus();
        e.tick(); // completes focus, enters short rest (2s)
        e.tick();
        assert_eq!(e.state(), TimerState::ShortRest);
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        assert!(e.is_running());
    }

    #[test]
    fn test_activity_resumes_focus_from_waiting() {
        let mut probe = MockIdleProbe::new();
        let mut calls = 0u32;
        probe.expect_idle_seconds().returning(move || {
            calls += 1;
            // Away for two polls, then back at the keyboard.
            if calls <= 2 { 10.0 } else { 1.5 }
        });
        let mut e = engine_with_probe(durations(60, 1, 1, 4), probe);

        e.start_focus();
        for _ in 0..60 {
            e.tick();
        }
        e.tick(); // rest tick reaching zero -> waiting
        assert_eq!(e.state(), TimerState::WaitingForUser);

        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        e.tick();
        assert_eq!(e.state(), TimerState::Focus);
        assert_eq!(e.snapshot().time_remaining, "01:00");
    }

    #[test]
    fn test_waiting_ignores_idle_at_threshold() {
        let mut probe = MockIdleProbe::new();
        probe.expect_idle_seconds().returning(|| 3.0);
        let mut e = engine_with_probe(durations(1, 1, 1, 4), probe);

        e.start_focus();
        e.tick(); // focus done -> rest
        e.tick(); // rest done -> waiting
        assert_eq!(e.state(), TimerState::WaitingForUser);

        // Exactly 3.0 seconds idle is not "active"; the threshold is strict.
        for _ in 0..5 {
            e.tick();
            assert_eq!(e.state(), TimerState::WaitingForUser);
        }
    }

    #[test]
    fn test_waiting_does_not_touch_counters() {
        let mut probe = MockIdleProbe::new();
        probe.expect_idle_seconds().returning(|| 1.0);
        let mut e = engine_with_probe(durations(1, 1, 1, 4), probe);

        e.start_focus();
        e.tick();
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        e.tick();
        assert_eq!(e.state(), TimerState::Focus);
        // Return-from-idle starts a session; it does not complete one.
        assert_eq!(e.snapshot().completed_sessions, 1);
        assert_eq!(e.snapshot().sessions_today, 1);
    }

    #[test]
    fn test_skip_to_rest_matches_natural_completion() {
        let threshold = 4;

        // Natural completion of session 4 earns a long rest...
        let mut natural = engine(durations(1, 1, 1, threshold));
        natural.start_focus();
        for _ in 0..4 {
            complete_focus_session(&mut natural, 1);
            if natural.snapshot().completed_sessions < 4 {
                natural.skip_to_focus();
            }
        }
        assert_eq!(natural.state(), TimerState::LongRest);

        // ...and skipping session 4 earns the same long rest.
        let mut skipped = engine(durations(1, 1, 1, threshold));
        skipped.start_focus();
        for _ in 0..3 {
            complete_focus_session(&mut skipped, 1);
            skipped.skip_to_focus();
        }
        assert_eq!(skipped.snapshot().completed_sessions, 3);
        skipped.skip_to_rest();
        assert_eq!(skipped.state(), TimerState::LongRest);
    }

    #[test]
    fn test_skip_to_rest_does_not_count_completion() {
        let mut e = engine(durations(60, 2, 3, 4));
        e.start_focus();
        e.tick();
        e.skip_to_rest();
        assert_eq!(e.state(), TimerState::ShortRest);
        assert_eq!(e.snapshot().completed_sessions, 0);
        assert_eq!(e.snapshot().sessions_today, 0);
    }

    #[test]
    fn test_skip_to_focus_restarts_full_duration() {
        let mut e = engine(durations(60, 30, 30, 4));
        e.start_focus();
        e.skip_to_rest();
        e.tick();
        e.skip_to_focus();
        assert_eq!(e.state(), TimerState::Focus);
        assert_eq!(e.snapshot().time_remaining, "01:00");
        assert_eq!(e.snapshot().completed_sessions, 0);
    }

    #[test]
    fn test_stop_from_every_active_state() {
        // Focus
        let mut e = engine(durations(60, 10, 10, 4));
        e.start_focus();
        e.stop();
        assert_eq!(e.state(), TimerState::Idle);
        assert_eq!(e.snapshot().time_remaining, "00:00");
        assert!(!e.is_running());

        // Short rest
        let mut e = engine(durations(60, 10, 10, 4));
        e.start_focus();
        e.skip_to_rest();
        e.stop();
        assert_eq!(e.state(), TimerState::Idle);
        assert!(!e.is_running());

        // Long rest
        let mut e = engine(durations(60, 10, 10, 1));
        e.start_focus();
        e.skip_to_rest();
        assert_eq!(e.state(), TimerState::LongRest);
        e.stop();
        assert_eq!(e.state(), TimerState::Idle);

        // Waiting for user
        let mut e = engine(durations(1, 1, 1, 4));
        e.start_focus();
        e.tick();
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        e.stop();
        assert_eq!(e.state(), TimerState::Idle);
        assert!(!e.is_running());
    }

    #[test]
    fn test_stop_halts_further_ticks() {
        let mut e = engine(durations(60, 10, 10, 4));
        e.start_focus();
        e.stop();
        for _ in 0..5 {
            e.tick();
        }
        assert_eq!(e.state(), TimerState::Idle);
        assert_eq!(e.snapshot().time_remaining, "00:00");
    }

    #[test]
    fn test_stop_preserves_counters() {
        let mut e = engine(durations(1, 1, 1, 4));
        e.start_focus();
        e.tick();
        assert_eq!(e.snapshot().completed_sessions, 1);
        e.stop();
        assert_eq!(e.snapshot().completed_sessions, 1);
        assert_eq!(e.snapshot().sessions_today, 1);
    }

    #[test]
    fn test_start_focus_while_focused_is_noop() {
        let mut e = engine(durations(120, 10, 10, 4));
        e.start_focus();
        e.tick();
        e.tick();
        let before = e.snapshot();
        e.start_focus();
        assert_eq!(e.snapshot(), before);
    }

    #[test]
    fn test_invalid_commands_are_noops() {
        let mut e = engine(durations(60, 10, 10, 4));

        // Nothing applies while idle.
        e.skip_to_rest();
        e.skip_to_focus();
        assert_eq!(e.state(), TimerState::Idle);

        // Skip-to-focus does not apply in focus; skip-to-rest not in rest.
        e.start_focus();
        e.skip_to_focus();
        assert_eq!(e.state(), TimerState::Focus);
        e.skip_to_rest();
        e.skip_to_rest();
        assert_eq!(e.state(), TimerState::ShortRest);
    }

    #[test]
    fn test_spec_example_cycle() {
        // focus=2s, short rest=2s, threshold=2
        let mut probe = MockIdleProbe::new();
        probe.expect_idle_seconds().returning(|| 1.5);
        let mut e = engine_with_probe(durations(2, 2, 2, 2), probe);

        e.start_focus();
        e.tick();
        e.tick();
        assert_eq!(e.state(), TimerState::ShortRest);
        assert_eq!(e.snapshot().completed_sessions, 1);

        e.tick();
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);

        e.tick();
        assert_eq!(e.state(), TimerState::Focus);
        assert_eq!(e.snapshot().completed_sessions, 1);
    }

    #[test]
    fn test_focus_notification_carries_picked_message() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, message| {
                title == "Focus Time! 🎯" && message.contains("Test message")
            })
            .times(1)
            .returning(|_, _| ());

        let mut e = TimerEngine::new(
            durations(25 * 60, 300, 900, 4),
            Box::new(notifier),
            away_probe(),
            fixed_picker(),
        );
        e.start_focus();
    }

    #[test]
    fn test_rest_notifications_name_the_break() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, _| title == "Focus Time! 🎯")
            .returning(|_, _| ());
        notifier
            .expect_notify()
            .withf(|title, message| {
                title == "Long Break! ☕" && message.contains("relax")
            })
            .times(1)
            .returning(|_, _| ());

        let mut e = TimerEngine::new(
            durations(60, 300, 900, 1),
            Box::new(notifier),
            away_probe(),
            fixed_picker(),
        );
        e.start_focus();
        e.skip_to_rest();
        assert_eq!(e.state(), TimerState::LongRest);
    }

    #[test]
    fn test_zero_threshold_is_clamped() {
        let mut e = engine(durations(1, 1, 1, 0));
        e.start_focus();
        e.tick();
        // Clamped to 1: every completion earns a long rest, not a panic.
        assert_eq!(e.state(), TimerState::LongRest);
    }

    #[test]
    fn test_tick_interval_per_state() {
        let mut e = engine(durations(1, 1, 1, 4));
        assert_eq!(e.tick_interval(), Duration::from_millis(500));
        e.start_focus();
        assert_eq!(e.tick_interval(), Duration::from_secs(1));
        e.tick();
        e.tick();
        assert_eq!(e.state(), TimerState::WaitingForUser);
        assert_eq!(e.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_snapshot_titles() {
        let mut e = engine(durations(25 * 60, 300, 900, 4));
        assert_eq!(e.snapshot().title(), "🍅 Ready");
        e.start_focus();
        assert_eq!(e.snapshot().title(), "🍅 25:00");
        e.skip_to_rest();
        assert_eq!(e.snapshot().title(), "☕ 05:00");
    }
}
