//! Desktop notification delivery.

use std::process::Command;

/// Fire-and-forget notification sink.
///
/// Called synchronously from transition handlers; the timer never depends
/// on delivery, so implementations must swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, title: &str, message: &str);
}

/// Notification Center delivery via `osascript`.
#[derive(Debug, Clone, Copy)]
pub struct OsaNotifier {
    enabled: bool,
    sound: bool,
}

impl OsaNotifier {
    /// Create a notifier honoring the user's notification settings.
    #[must_use]
    pub const fn new(enabled: bool, sound: bool) -> Self {
        Self { enabled, sound }
    }
}

impl Notifier for OsaNotifier {
    fn notify(&self, title: &str, message: &str) {
        if !self.enabled {
            return;
        }

        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape(message),
            escape(title),
        );
        if self.sound {
            script.push_str(" sound name \"Glass\"");
        }

        // Spawn without waiting; delivery failures are ignored.
        let _child = Command::new("osascript").arg("-e").arg(script).spawn();
    }
}

/// Escape a string for embedding in an AppleScript double-quoted literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_disabled_notifier_is_silent() {
        // Must not spawn anything; just exercising the early return.
        let notifier = OsaNotifier::new(false, true);
        notifier.notify("Title", "Message");
    }
}
