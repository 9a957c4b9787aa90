//! Launch-at-login registration via a LaunchAgent.

use std::path::PathBuf;
use std::process::Command;

use crate::error::PomobarError;

/// Reverse-DNS label for the LaunchAgent plist.
pub const BUNDLE_ID: &str = "com.danhart.pomobar";

/// Login-item registration, toggled from the menu surface.
///
/// Entirely orthogonal to the timer state machine.
pub trait Autostart {
    /// Check if launch-at-login is registered.
    fn is_enabled(&self) -> bool;

    /// Register the app to launch at login.
    ///
    /// # Errors
    ///
    /// Returns an error if the plist cannot be written.
    fn enable(&self) -> Result<(), PomobarError>;

    /// Remove the login registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the plist cannot be removed.
    fn disable(&self) -> Result<(), PomobarError>;
}

/// LaunchAgent-backed autostart.
///
/// Enabling writes `~/Library/LaunchAgents/<bundle id>.plist` with
/// `RunAtLoad` set, then asks `launchctl` to load it. The `launchctl` call
/// is best-effort: registration still takes effect at next login if it
/// fails, so its result is ignored.
#[derive(Debug, Clone)]
pub struct LaunchAgent {
    plist_path: PathBuf,
    program: PathBuf,
}

impl LaunchAgent {
    /// LaunchAgent for the current executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory or the executable path
    /// cannot be determined.
    pub fn new() -> Result<Self, PomobarError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomobarError::Config("Could not determine home directory".to_string())
        })?;
        let plist_path = PathBuf::from(home)
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{BUNDLE_ID}.plist"));
        let program = std::env::current_exe()?;

        Ok(Self {
            plist_path,
            program,
        })
    }

    /// LaunchAgent with explicit paths (useful for testing).
    #[must_use]
    pub const fn with_paths(plist_path: PathBuf, program: PathBuf) -> Self {
        Self {
            plist_path,
            program,
        }
    }

    fn plist_contents(&self) -> String {
        let program = self.program.display();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Label</key>
	<string>{BUNDLE_ID}</string>
	<key>ProgramArguments</key>
	<array>
		<string>{program}</string>
		<string>run</string>
	</array>
	<key>RunAtLoad</key>
	<true/>
	<key>KeepAlive</key>
	<false/>
</dict>
</plist>
"#
        )
    }
}

impl Autostart for LaunchAgent {
    fn is_enabled(&self) -> bool {
        self.plist_path.exists()
    }

    fn enable(&self) -> Result<(), PomobarError> {
        if let Some(dir) = self.plist_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                PomobarError::Platform(format!(
                    "Failed to create LaunchAgents directory {}: {e}",
                    dir.display()
                ))
            })?;
        }
        std::fs::write(&self.plist_path, self.plist_contents()).map_err(|e| {
            PomobarError::Platform(format!(
                "Failed to write LaunchAgent plist {}: {e}",
                self.plist_path.display()
            ))
        })?;

        let _status = Command::new("launchctl")
            .arg("load")
            .arg(&self.plist_path)
            .status();
        Ok(())
    }

    fn disable(&self) -> Result<(), PomobarError> {
        if self.plist_path.exists() {
            // Unload before removing so a running agent is deregistered.
            let _status = Command::new("launchctl")
                .arg("unload")
                .arg(&self.plist_path)
                .status();
            std::fs::remove_file(&self.plist_path).map_err(|e| {
                PomobarError::Platform(format!(
                    "Failed to remove LaunchAgent plist {}: {e}",
                    self.plist_path.display()
                ))
            })?;
        }
        Ok(())
    }
}
