use serde::Serialize;
use std::fmt;

/// What the user asked for on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Search,
    Install,
    Update,
    Remove,
    List,
}

impl Action {
    /// Whether the action operates on a list of package names
    pub fn takes_packages(&self) -> bool {
        matches!(self, Self::Search | Self::Install | Self::Remove)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Install => write!(f, "install"),
            Self::Update => write!(f, "update"),
            Self::Remove => write!(f, "remove"),
            Self::List => write!(f, "list"),
        }
    }
}

/// One package line parsed out of a manager's search output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub version: String,
    /// Repository, or `remote/branch` for flatpak
    pub origin: String,
    pub installed: bool,
}

impl ResultRow {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        origin: impl Into<String>,
        installed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            origin: origin.into(),
            installed,
        }
    }
}

/// A parsed search line: either a package row or text passed through as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SearchEntry {
    Package(ResultRow),
    Passthrough(String),
}

/// A fully parsed command line request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub action: Action,
    pub packages: Vec<String>,
    /// Backend name as typed by the user, not yet normalized
    pub source: Option<String>,
}

impl OperationRequest {
    pub fn new(action: Action, packages: Vec<String>, source: Option<String>) -> Self {
        Self {
            action,
            packages,
            source,
        }
    }
}
