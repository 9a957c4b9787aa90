//! System idle-time probe.

use std::process::Command;

/// Reports seconds since the platform last saw keyboard or mouse input.
///
/// Queried while the timer waits for the user to return from a rest.
#[cfg_attr(test, mockall::automock)]
pub trait IdleProbe: Send + Sync {
    /// Seconds of user inactivity.
    fn idle_seconds(&self) -> f64;
}

/// Idle probe backed by the IOKit HID system.
///
/// Shells out to `ioreg` and parses the `HIDIdleTime` property, which is
/// reported in nanoseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacIdleProbe;

impl IdleProbe for MacIdleProbe {
    #[allow(clippy::cast_precision_loss)]
    fn idle_seconds(&self) -> f64 {
        match query_hid_idle_ns() {
            Some(ns) => ns as f64 / 1_000_000_000.0,
            // A broken probe must not wake the timer; report "still away"
            // so the countdown loop keeps polling instead of dying.
            None => f64::MAX,
        }
    }
}

fn query_hid_idle_ns() -> Option<u64> {
    let output = Command::new("ioreg")
        .args(["-c", "IOHIDSystem", "-r", "-d", "1", "-k", "HIDIdleTime"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_hid_idle_ns(&String::from_utf8_lossy(&output.stdout))
}

/// Pull the nanosecond value out of an `ioreg` property dump line like
/// `    "HIDIdleTime" = 1234567890`.
fn parse_hid_idle_ns(ioreg_output: &str) -> Option<u64> {
    let line = ioreg_output
        .lines()
        .find(|line| line.contains("HIDIdleTime"))?;
    let value = line.rsplit('=').next()?.trim();
    value.parse().ok()
}
