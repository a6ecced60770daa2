//! Settings Module
//!
//! Optional `settings.kdl` in the config directory. Keys may sit at the top
//! level or inside a `settings { }` block:
//!
//! ```kdl
//! settings {
//!     color "never"
//!     elevation "doas"
//!     pacing-ms 250
//!     flatpak-remote "flathub"
//!     verbose #true
//!     probe-fallback #false
//! }
//! ```

use crate::backends::commands::DEFAULT_FLATPAK_REMOTE;
use crate::error::{AnypkgError, Result};
use crate::ui::ColorMode;
use crate::utils::{paths, platform};
use kdl::{KdlDocument, KdlNode, KdlValue};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ELEVATION: &str = "sudo";
pub const DEFAULT_PACING_MS: u64 = 500;

const VALID_KEYS: &[&str] = &[
    "color",
    "elevation",
    "pacing-ms",
    "flatpak-remote",
    "verbose",
    "probe-fallback",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub color: ColorMode,
    /// Command prefixed to system backend invocations
    pub elevation: String,
    /// Delay between consecutive backend runs during update
    pub pacing_ms: u64,
    pub flatpak_remote: String,
    pub verbose: bool,
    /// Probe the standard system directories when `PATH` lookup fails
    pub probe_fallback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            elevation: DEFAULT_ELEVATION.to_string(),
            pacing_ms: DEFAULT_PACING_MS,
            flatpak_remote: DEFAULT_FLATPAK_REMOTE.to_string(),
            verbose: false,
            probe_fallback: true,
        }
    }
}

impl Settings {
    /// Load settings from the config directory, or defaults when there is no file
    pub fn load() -> Result<Self> {
        let Ok(settings_file) = paths::settings_file() else {
            return Ok(Self::default());
        };
        Self::load_from(&settings_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AnypkgError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse()?;
        let mut settings = Self::default();

        for node in doc.nodes() {
            if node.name().value() == "settings" {
                if let Some(children) = node.children() {
                    for child in children.nodes() {
                        settings.apply(child)?;
                    }
                }
            } else {
                settings.apply(node)?;
            }
        }

        Ok(settings)
    }

    fn apply(&mut self, node: &KdlNode) -> Result<()> {
        let key = node.name().value();
        if !VALID_KEYS.contains(&key) {
            return Err(AnypkgError::ConfigError(format!(
                "Unknown setting: '{}'. Valid settings: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }

        let value = node
            .entries()
            .first()
            .map(|entry| entry.value())
            .ok_or_else(|| AnypkgError::ConfigError(format!("Setting '{}' has no value", key)))?;

        match key {
            "color" => {
                self.color = string_value(key, value)?
                    .parse()
                    .map_err(AnypkgError::ConfigError)?;
            }
            "elevation" => {
                let command = string_value(key, value)?;
                platform::parse_elevation(command)?;
                self.elevation = command.to_string();
            }
            "pacing-ms" => {
                self.pacing_ms = value
                    .as_integer()
                    .and_then(|n| u64::try_from(n).ok())
                    .ok_or_else(|| invalid(key, value, "a non-negative integer"))?;
            }
            "flatpak-remote" => {
                let remote = string_value(key, value)?.trim();
                if remote.is_empty() {
                    return Err(invalid(key, value, "a remote name"));
                }
                self.flatpak_remote = remote.to_string();
            }
            "verbose" => self.verbose = bool_value(key, value)?,
            "probe-fallback" => self.probe_fallback = bool_value(key, value)?,
            _ => {}
        }

        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// The elevation command split into argv form
    pub fn elevation_argv(&self) -> Result<Vec<String>> {
        platform::parse_elevation(&self.elevation)
    }
}

fn invalid(key: &str, value: &KdlValue, expected: &str) -> AnypkgError {
    AnypkgError::ConfigError(format!(
        "Invalid value for '{}': {}. Expected {}",
        key, value, expected
    ))
}

fn string_value<'a>(key: &str, value: &'a KdlValue) -> Result<&'a str> {
    value.as_string().ok_or_else(|| invalid(key, value, "a string"))
}

fn bool_value(key: &str, value: &KdlValue) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, value, "#true or #false"))
}
