//! Core traits for dependency injection and testability
//!
//! The dispatcher never talks to the terminal or spawns processes directly.
//! It goes through these two seams so the selection policy can be exercised
//! with scripted answers and a recording runner instead of real package
//! managers.

use crate::error::Result;
use crate::ui;

/// How a child process is attached to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// stdout/stderr captured for parsing (search, `flatpak list`)
    Capture,
    /// Inherits the terminal so the manager can ask its own questions
    Interactive,
}

/// A single external command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program followed by its arguments
    pub argv: Vec<String>,
    /// Prefix with the elevation command
    pub elevated: bool,
    pub mode: RunMode,
}

impl Invocation {
    pub fn new(argv: Vec<String>, elevated: bool, mode: RunMode) -> Self {
        Self {
            argv,
            elevated,
            mode,
        }
    }

    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }
}

/// Result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Trait for running external commands
///
/// Implementations return `Ok` for any process that ran to completion,
/// whatever its exit code. `Err` is reserved for spawn failures and user
/// interruption.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutput>;

    /// Whether the user has cancelled; nothing new may start once true
    fn interrupted(&self) -> bool {
        ui::is_interrupted()
    }
}

/// Trait for yes/no questions. Implementations default to "no".
pub trait Prompter {
    fn confirm(&self, question: &str) -> bool;
}
