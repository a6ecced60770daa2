use crate::error::{AnypkgError, Result};
use crate::traits::Invocation;
use std::process::Command;

/// Full argument vector for `invocation`, with the elevation prefix when needed
pub fn effective_argv(invocation: &Invocation, elevation: &[String]) -> Result<Vec<String>> {
    if invocation.argv.is_empty() {
        return Err(AnypkgError::SystemCommandFailed {
            command: String::new(),
            reason: "Empty command".to_string(),
        });
    }

    if !invocation.elevated {
        return Ok(invocation.argv.clone());
    }

    if elevation.is_empty() {
        return Err(AnypkgError::ConfigError(
            "No elevation command configured".to_string(),
        ));
    }

    Ok(elevation.iter().chain(&invocation.argv).cloned().collect())
}

/// Build a direct program invocation in a platform-aware way.
///
/// - Unix: `program args...` or `<elevation> program args...`
/// - Windows: `program args...` (elevated execution not supported)
pub fn build_program_command(invocation: &Invocation, elevation: &[String]) -> Result<Command> {
    #[cfg(not(unix))]
    {
        if invocation.elevated {
            return Err(AnypkgError::Other(
                "Elevated execution is not implemented on this platform".to_string(),
            ));
        }
    }

    let argv = effective_argv(invocation, elevation)?;
    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]);
    Ok(cmd)
}

/// Shell-quoted rendering of the command, for display only
pub fn display_command(invocation: &Invocation, elevation: &[String]) -> String {
    let argv = effective_argv(invocation, elevation).unwrap_or_else(|_| invocation.argv.clone());
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

/// Split the configured elevation command ("sudo", "doas", "sudo -E")
pub fn parse_elevation(command: &str) -> Result<Vec<String>> {
    shlex::split(command)
        .filter(|parts| !parts.is_empty())
        .ok_or_else(|| {
            AnypkgError::ConfigError(format!("Invalid elevation command: '{}'", command))
        })
}
