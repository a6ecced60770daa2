//! # Package Manager Backends
//!
//! Every supported package manager is a variant of [`Backend`]. A backend
//! knows three things about its manager:
//!
//! - how to find it on the host ([`detect`])
//! - how to spell each operation as an argument vector ([`commands`])
//! - how to read its search output ([`parsers`])
//!
//! ## Categories
//!
//! - **System** backends (pacman, apt, zypper) are the host's primary package
//!   source. Their commands run through the elevation command.
//! - **Alternative** backends (flatpak, yay) are only used when asked for or
//!   when no system backend exists. They never run elevated.
//!
//! Registry order is [`Backend::ALL`]. Detection preserves it, so "the first
//! system backend" is always pacman before apt before zypper.

pub mod commands;
pub mod detect;
pub mod parsers;

pub use commands::{CommandOptions, Operation};
pub use detect::{AvailabilitySet, Detector};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Pacman,
    Apt,
    Zypper,
    Flatpak,
    Yay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    System,
    Alternative,
}

impl Backend {
    /// Registry order, also the detection order
    pub const ALL: [Backend; 5] = [
        Backend::Pacman,
        Backend::Apt,
        Backend::Zypper,
        Backend::Flatpak,
        Backend::Yay,
    ];

    /// Canonical identifier, as accepted by `--source`
    pub fn name(self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Apt => "apt",
            Self::Zypper => "zypper",
            Self::Flatpak => "flatpak",
            Self::Yay => "yay",
        }
    }

    /// Executable probed during detection
    pub fn binary(self) -> &'static str {
        self.name()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Pacman => "Pacman",
            Self::Apt => "Apt",
            Self::Zypper => "Zypper",
            Self::Flatpak => "Flatpak",
            Self::Yay => "Yay",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Pacman | Self::Apt | Self::Zypper => Category::System,
            Self::Flatpak | Self::Yay => Category::Alternative,
        }
    }

    pub fn is_system(self) -> bool {
        self.category() == Category::System
    }

    pub fn needs_elevation(self) -> bool {
        self.is_system()
    }

    /// Case-insensitive lookup by canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|b| b.name() == lowered)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown package manager '{}'", s))
    }
}
