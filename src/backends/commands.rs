//! Argument vectors for every backend operation

use super::Backend;
use crate::error::{AnypkgError, Result};
use crate::traits::{Invocation, RunMode};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_FLATPAK_REMOTE: &str = "flathub";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Search,
    Install,
    Update,
    Remove,
    /// Remove unused runtimes (flatpak only)
    Cleanup,
}

impl Operation {
    pub fn takes_packages(self) -> bool {
        matches!(self, Self::Search | Self::Install | Self::Remove)
    }

    /// Search output is parsed, everything else talks to the user directly
    pub fn run_mode(self) -> RunMode {
        match self {
            Self::Search => RunMode::Capture,
            _ => RunMode::Interactive,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Install => write!(f, "install"),
            Self::Update => write!(f, "update"),
            Self::Remove => write!(f, "remove"),
            Self::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// Settings that change how commands are spelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    pub flatpak_remote: String,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            flatpak_remote: DEFAULT_FLATPAK_REMOTE.to_string(),
        }
    }
}

fn template(backend: Backend, op: Operation, opts: &CommandOptions) -> Option<Vec<String>> {
    let args: Vec<&str> = match (backend, op) {
        (Backend::Pacman, Operation::Search) => vec!["pacman", "-Ss"],
        (Backend::Pacman, Operation::Install) => vec!["pacman", "-S"],
        (Backend::Pacman, Operation::Update) => vec!["pacman", "-Syu"],
        (Backend::Pacman, Operation::Remove) => vec!["pacman", "-Rs"],

        (Backend::Apt, Operation::Search) => vec!["apt", "search"],
        (Backend::Apt, Operation::Install) => vec!["apt", "install"],
        // Two steps, one elevated shell
        (Backend::Apt, Operation::Update) => vec!["sh", "-c", "apt update && apt upgrade"],
        (Backend::Apt, Operation::Remove) => vec!["apt", "autoremove", "--purge"],

        (Backend::Zypper, Operation::Search) => vec!["zypper", "search", "-s"],
        (Backend::Zypper, Operation::Install) => vec!["zypper", "install"],
        (Backend::Zypper, Operation::Update) => vec!["zypper", "dup"],
        (Backend::Zypper, Operation::Remove) => vec!["zypper", "remove", "--clean-deps"],

        (Backend::Flatpak, Operation::Search) => vec!["flatpak", "search"],
        (Backend::Flatpak, Operation::Install) => {
            vec!["flatpak", "install", opts.flatpak_remote.as_str()]
        }
        (Backend::Flatpak, Operation::Update) => vec!["flatpak", "update"],
        (Backend::Flatpak, Operation::Remove) => vec!["flatpak", "uninstall"],
        (Backend::Flatpak, Operation::Cleanup) => vec!["flatpak", "uninstall", "--unused"],

        (Backend::Yay, Operation::Search) => vec!["yay", "-Ss"],
        (Backend::Yay, Operation::Install) => vec!["yay", "-S"],
        (Backend::Yay, Operation::Update) => vec!["yay", "-Syu"],
        (Backend::Yay, Operation::Remove) => vec!["yay", "-Rs"],

        (_, Operation::Cleanup) => return None,
    };

    Some(args.into_iter().map(String::from).collect())
}

/// Build the argument vector for `op` on `backend`.
///
/// Packages are appended for search, install and remove and ignored otherwise.
pub fn build_argv(
    backend: Backend,
    op: Operation,
    packages: &[String],
    opts: &CommandOptions,
) -> Result<Vec<String>> {
    let mut argv =
        template(backend, op, opts).ok_or_else(|| AnypkgError::UnsupportedOperation {
            backend: backend.to_string(),
            operation: op.to_string(),
        })?;

    if op.takes_packages() {
        argv.extend(packages.iter().cloned());
    }

    Ok(argv)
}

/// Build the full invocation, including elevation and terminal handling
pub fn invocation(
    backend: Backend,
    op: Operation,
    packages: &[String],
    opts: &CommandOptions,
) -> Result<Invocation> {
    Ok(Invocation::new(
        build_argv(backend, op, packages, opts)?,
        backend.needs_elevation(),
        op.run_mode(),
    ))
}

/// `flatpak list`, used to mark installed apps in flatpak search results
pub fn flatpak_installed_invocation() -> Invocation {
    Invocation::new(
        vec!["flatpak".to_string(), "list".to_string()],
        false,
        RunMode::Capture,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn argv(backend: Backend, op: Operation, packages: &[&str]) -> Vec<String> {
        build_argv(backend, op, &pkgs(packages), &CommandOptions::default()).unwrap()
    }

    #[test]
    fn pacman_commands() {
        assert_eq!(
            argv(Backend::Pacman, Operation::Search, &["firefox"]),
            ["pacman", "-Ss", "firefox"]
        );
        assert_eq!(
            argv(Backend::Pacman, Operation::Install, &["a", "b"]),
            ["pacman", "-S", "a", "b"]
        );
        assert_eq!(argv(Backend::Pacman, Operation::Update, &[]), ["pacman", "-Syu"]);
        assert_eq!(argv(Backend::Pacman, Operation::Remove, &["a"]), ["pacman", "-Rs", "a"]);
    }

    #[test]
    fn apt_update_chains_two_steps_in_one_shell() {
        assert_eq!(
            argv(Backend::Apt, Operation::Update, &[]),
            ["sh", "-c", "apt update && apt upgrade"]
        );
        assert_eq!(
            argv(Backend::Apt, Operation::Remove, &["vim"]),
            ["apt", "autoremove", "--purge", "vim"]
        );
    }

    #[test]
    fn zypper_commands() {
        assert_eq!(
            argv(Backend::Zypper, Operation::Search, &["vim"]),
            ["zypper", "search", "-s", "vim"]
        );
        assert_eq!(argv(Backend::Zypper, Operation::Update, &[]), ["zypper", "dup"]);
        assert_eq!(
            argv(Backend::Zypper, Operation::Remove, &["vim"]),
            ["zypper", "remove", "--clean-deps", "vim"]
        );
    }

    #[test]
    fn flatpak_install_targets_configured_remote() {
        assert_eq!(
            argv(Backend::Flatpak, Operation::Install, &["org.gimp.GIMP"]),
            ["flatpak", "install", "flathub", "org.gimp.GIMP"]
        );

        let opts = CommandOptions {
            flatpak_remote: "fedora".to_string(),
        };
        let custom =
            build_argv(Backend::Flatpak, Operation::Install, &pkgs(&["x"]), &opts).unwrap();
        assert_eq!(custom, ["flatpak", "install", "fedora", "x"]);
    }

    #[test]
    fn cleanup_is_flatpak_only() {
        assert_eq!(
            argv(Backend::Flatpak, Operation::Cleanup, &["ignored"]),
            ["flatpak", "uninstall", "--unused"]
        );

        let err = build_argv(Backend::Pacman, Operation::Cleanup, &[], &CommandOptions::default())
            .unwrap_err();
        assert!(matches!(err, AnypkgError::UnsupportedOperation { .. }));
    }

    #[test]
    fn update_ignores_packages() {
        assert_eq!(argv(Backend::Yay, Operation::Update, &["stray"]), ["yay", "-Syu"]);
    }

    #[test]
    fn invocation_carries_elevation_and_mode() {
        let opts = CommandOptions::default();
        let search = invocation(Backend::Apt, Operation::Search, &pkgs(&["vim"]), &opts).unwrap();
        assert!(search.elevated);
        assert_eq!(search.mode, RunMode::Capture);

        let install = invocation(Backend::Yay, Operation::Install, &pkgs(&["fd"]), &opts).unwrap();
        assert!(!install.elevated);
        assert_eq!(install.mode, RunMode::Interactive);
    }
}
