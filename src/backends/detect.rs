//! Host probing for package manager binaries
//!
//! Detection runs once at startup. A binary counts as present when it
//! resolves on `PATH`, or when it sits executable in one of the standard
//! system directories. The second check matters under elevated or restricted
//! environments where `PATH` is trimmed.

use super::{Backend, Category};
use crate::error::{AnypkgError, Result};
use crate::ui;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directories checked when `PATH` lookup fails
pub const FALLBACK_DIRS: &[&str] = &[
    "/usr/bin",
    "/usr/local/bin",
    "/bin",
    "/sbin",
    "/usr/sbin",
    "/usr/local/sbin",
];

/// Finds package manager executables
#[derive(Debug, Clone)]
pub struct Detector {
    /// `PATH`-style search list; `None` uses the process environment
    search_path: Option<OsString>,
    fallback_dirs: Vec<PathBuf>,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(None, FALLBACK_DIRS.iter().map(PathBuf::from).collect())
    }
}

impl Detector {
    pub fn new(search_path: Option<OsString>, fallback_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            fallback_dirs,
        }
    }

    /// Detector that only consults `PATH`
    pub fn path_only() -> Self {
        Self::new(None, Vec::new())
    }

    /// Location of `binary`, if it can be found
    pub fn locate(&self, binary: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => which::which_in(binary, Some(paths), Path::new("/")),
            None => which::which(binary),
        };

        if let Ok(path) = found {
            return Some(path);
        }

        self.fallback_dirs
            .iter()
            .map(|dir| dir.join(binary))
            .find(|candidate| is_executable(candidate))
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        self.locate(backend.binary()).is_some()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// The backends found on this host, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    backends: Vec<Backend>,
}

impl AvailabilitySet {
    /// Probe every known backend once
    pub fn detect(detector: &Detector) -> Self {
        let backends = Backend::ALL
            .into_iter()
            .filter(|backend| {
                let found = detector.locate(backend.binary());
                match &found {
                    Some(path) => ui::verbose(&format!("{}: {}", backend, path.display())),
                    None => ui::verbose(&format!("{}: not found", backend)),
                }
                found.is_some()
            })
            .collect();

        Self { backends }
    }

    /// Build a set from known backends. Order follows the registry regardless
    /// of input order; duplicates are dropped.
    pub fn from_backends<I>(backends: I) -> Self
    where
        I: IntoIterator<Item = Backend>,
    {
        let wanted: Vec<Backend> = backends.into_iter().collect();
        Self {
            backends: Backend::ALL
                .into_iter()
                .filter(|b| wanted.contains(b))
                .collect(),
        }
    }

    pub fn contains(&self, backend: Backend) -> bool {
        self.backends.contains(&backend)
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Backend> + '_ {
        self.backends.iter().copied()
    }

    pub fn system(&self) -> impl Iterator<Item = Backend> + '_ {
        self.by_category(Category::System)
    }

    pub fn alternatives(&self) -> impl Iterator<Item = Backend> + '_ {
        self.by_category(Category::Alternative)
    }

    fn by_category(&self, category: Category) -> impl Iterator<Item = Backend> + '_ {
        self.iter().filter(move |b| b.category() == category)
    }

    pub fn has_system(&self) -> bool {
        self.system().next().is_some()
    }

    pub fn first_system(&self) -> Option<Backend> {
        self.system().next()
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|b| b.name().to_string()).collect()
    }

    /// Map user input onto a detected backend's canonical name.
    ///
    /// Unknown input comes back unchanged; the result still has to be checked
    /// with [`AvailabilitySet::resolve`].
    pub fn normalize_source(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        self.iter()
            .find(|b| b.name() == lowered)
            .map(|b| b.name().to_string())
            .unwrap_or_else(|| raw.to_string())
    }

    /// Normalize and require the backend to be detected
    pub fn resolve(&self, raw: &str) -> Result<Backend> {
        let normalized = self.normalize_source(raw);
        self.iter()
            .find(|b| b.name() == normalized)
            .ok_or_else(|| AnypkgError::UnknownSource {
                given: raw.to_string(),
                available: self.names(),
            })
    }
}
