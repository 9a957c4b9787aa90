//! The Pomodoro session state machine.
//!
//! `TimerEngine` is the synchronous core: commands and ticks are total
//! functions of the current state. `SessionController` wraps it for
//! concurrent use and drives the once-per-second countdown thread.

mod controller;
mod engine;
mod messages;
mod state;

pub use controller::SessionController;
pub use engine::{Durations, Snapshot, TimerEngine};
pub use messages::{MessagePicker, RandomPicker, INSPIRATIONAL_MESSAGES};
pub use state::{format_mmss, CommandSet, RestKind, TimerState};

#[cfg(test)]
pub use messages::MockMessagePicker;
