//! Real process execution behind [`CommandRunner`]

use crate::error::{AnypkgError, Result};
use crate::traits::{CommandRunner, Invocation, RunMode, RunOutput};
use crate::ui;
use crate::utils::platform;
use std::process::{ExitStatus, Stdio};

/// Runs commands on the host, elevating through the configured command
pub struct SystemRunner {
    elevation: Vec<String>,
    interrupt_check: fn() -> bool,
}

impl SystemRunner {
    pub fn new(elevation: Vec<String>) -> Self {
        Self {
            elevation,
            interrupt_check: ui::is_interrupted,
        }
    }

    /// Replace the source of the cancellation flag
    pub fn with_interrupt_check(mut self, check: fn() -> bool) -> Self {
        self.interrupt_check = check;
        self
    }

    fn spawn_error(&self, invocation: &Invocation, e: std::io::Error) -> AnypkgError {
        AnypkgError::SystemCommandFailed {
            command: platform::display_command(invocation, &self.elevation),
            reason: e.to_string(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutput> {
        // A cancelled run never starts another child
        if self.interrupted() {
            return Err(AnypkgError::Interrupted);
        }

        let mut cmd = platform::build_program_command(invocation, &self.elevation)?;
        ui::command(&platform::display_command(invocation, &self.elevation));

        let output = match invocation.mode {
            RunMode::Capture => {
                let out = cmd
                    .stdin(Stdio::inherit())
                    .output()
                    .map_err(|e| self.spawn_error(invocation, e))?;
                RunOutput {
                    code: exit_code(out.status),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                }
            }
            RunMode::Interactive => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| self.spawn_error(invocation, e))?;
                RunOutput {
                    code: exit_code(status),
                    ..Default::default()
                }
            }
        };

        // Ctrl-C reaches the child too; once it is gone, stop the whole run
        if self.interrupted() {
            return Err(AnypkgError::Interrupted);
        }

        Ok(output)
    }

    fn interrupted(&self) -> bool {
        (self.interrupt_check)()
    }
}

/// Exit code, or 128 + signal number for children killed by a signal
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(argv: &[&str]) -> Invocation {
        Invocation::new(
            argv.iter().map(|s| s.to_string()).collect(),
            false,
            RunMode::Capture,
        )
    }

    #[test]
    #[cfg(unix)]
    fn captures_stdout_stderr_and_code() {
        let runner = SystemRunner::new(vec!["sudo".to_string()]);
        let out = runner
            .run(&capture(&["sh", "-c", "echo found; echo oops >&2; exit 3"]))
            .unwrap();

        assert_eq!(out.code, 3);
        assert_eq!(out.stdout.trim(), "found");
        assert_eq!(out.stderr.trim(), "oops");
        assert!(!out.success());
    }

    #[test]
    fn missing_program_is_a_command_failure() {
        let runner = SystemRunner::new(vec!["sudo".to_string()]);
        let err = runner
            .run(&capture(&["anypkg-definitely-not-a-real-binary"]))
            .unwrap_err();
        assert!(matches!(err, AnypkgError::SystemCommandFailed { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn pending_interrupt_starts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let script = format!("touch '{}'", marker.display());

        let runner = SystemRunner::new(vec!["sudo".to_string()]).with_interrupt_check(|| true);
        let err = runner.run(&capture(&["sh", "-c", &script])).unwrap_err();

        assert!(matches!(err, AnypkgError::Interrupted));
        assert!(!marker.exists(), "child ran although the run was cancelled");
    }
}
