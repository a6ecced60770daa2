use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnypkgError {
    /// Bad user input caught before any process is spawned
    #[error("{0}")]
    Validation(String),

    #[error(
        "Package manager '{given}' not found or not available (available: {})",
        format_available(.available)
    )]
    UnknownSource {
        given: String,
        available: Vec<String>,
    },

    #[error("No package manager available for {0}")]
    NoBackendAvailable(String),

    #[error("This program should not be run with elevated privileges")]
    AlreadyElevated,

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("'{operation}' is not supported by {backend}")]
    UnsupportedOperation { backend: String, operation: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("KDL parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

impl AnypkgError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 130,
            _ => 1,
        }
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, AnypkgError>;
