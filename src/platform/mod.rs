//! macOS platform services consumed by the timer.
//!
//! Each service sits behind a narrow trait so the state machine can be
//! driven in tests without touching the system:
//! - Notification Center delivery (osascript)
//! - HID idle time (ioreg)
//! - Launch-at-login registration (LaunchAgents + launchctl)

mod autostart;
mod idle;
mod notify;

pub use autostart::{Autostart, LaunchAgent};
pub use idle::{IdleProbe, MacIdleProbe};
pub use notify::{Notifier, OsaNotifier};

#[cfg(test)]
pub use idle::MockIdleProbe;
#[cfg(test)]
pub use notify::MockNotifier;
