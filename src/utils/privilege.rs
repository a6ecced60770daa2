//! Detection of an already-elevated process

use std::env;

/// Set by sudo for the commands it runs
pub const SUDO_USER_VAR: &str = "SUDO_USER";

/// Whether we are running as root or under sudo
pub fn running_elevated() -> bool {
    env::var_os(SUDO_USER_VAR).is_some() || is_root()
}

#[cfg(unix)]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}
