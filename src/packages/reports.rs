//! What the dispatcher hands back to the presentation layer

use crate::backends::{Backend, Operation};
use crate::core::types::SearchEntry;
use serde::Serialize;

/// Result of searching one backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Parsed package lines (and pass-through text)
    Entries { entries: Vec<SearchEntry> },
    /// Flatpak output with too few columns, shown as a table
    Table { rows: Vec<Vec<String>> },
    /// Output nothing could be parsed from, shown verbatim
    Raw { output: String },
    NoMatches,
    /// Non-zero exit (`code`), or the process never started (`code: None`)
    Failed { code: Option<i32>, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub backend: Backend,
    #[serde(flatten)]
    pub outcome: SearchOutcome,
}

/// One install, update, remove or cleanup run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub backend: Backend,
    pub operation: Operation,
    /// Exit code; `None` when the process could not be started
    pub code: Option<i32>,
    pub error: Option<String>,
}

impl StepReport {
    pub fn finished(backend: Backend, operation: Operation, code: i32) -> Self {
        Self {
            backend,
            operation,
            code: Some(code),
            error: None,
        }
    }

    pub fn not_started(backend: Backend, operation: Operation, error: String) -> Self {
        Self {
            backend,
            operation,
            code: None,
            error: Some(error),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn subject(&self) -> String {
        match self.operation {
            Operation::Install => "Package installation".to_string(),
            Operation::Remove => "Package removal".to_string(),
            Operation::Cleanup => "Cleanup".to_string(),
            Operation::Update => format!("{} update", self.backend.display_name()),
            Operation::Search => "Search".to_string(),
        }
    }

    /// One-line summary, e.g. "Pacman update failed with code 1"
    pub fn describe(&self) -> String {
        match (self.code, &self.error) {
            (Some(0), _) => format!("{} completed", self.subject()),
            (Some(code), _) => format!("{} failed with code {}", self.subject(), code),
            (None, Some(err)) => format!("{} failed: {}", self.subject(), err),
            (None, None) => format!("{} failed", self.subject()),
        }
    }
}

/// Detected backends, split by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    pub system: Vec<Backend>,
    pub alternatives: Vec<Backend>,
    /// Alternatives that were not found on this host
    pub missing_alternatives: Vec<Backend>,
}

impl ListReport {
    pub fn is_empty(&self) -> bool {
        self.system.is_empty() && self.alternatives.is_empty()
    }
}
