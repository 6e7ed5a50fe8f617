//! Fire-and-forget launching of programs and URLs.

use std::process::{Command, Stdio};

/// OS-level side effects of voice commands.
///
/// Launches are fire-and-forget: failures are logged for diagnostics but
/// never surfaced to the dispatch cycle.
pub trait Launcher: Send + Sync {
    /// Launch a program (first element) with its arguments (rest)
    fn launch_program(&self, command: &[String]);

    /// Open a URL in the default browser
    fn open_url(&self, url: &str);
}

/// Launcher backed by real OS process spawning
pub struct OsLauncher;

impl Launcher for OsLauncher {
    fn launch_program(&self, command: &[String]) {
        let Some((program, args)) = command.split_first() else {
            return;
        };

        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = result {
            tracing::debug!("failed to launch {program}: {e}");
        }
    }

    fn open_url(&self, url: &str) {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        };
        #[cfg(target_os = "windows")]
        let mut command = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        };

        let result = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = result {
            tracing::debug!("failed to open {url}: {e}");
        }
    }
}
