//! Input validation for package arguments
//!
//! Packages are passed to managers as separate argv entries, never through a
//! shell, so only structurally impossible names are rejected here.

use crate::error::{AnypkgError, Result};

/// Validate a single package name, returning it trimmed
pub fn validate_package_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(AnypkgError::Validation(format!(
            "Invalid package name: {:?}",
            name
        )));
    }

    if trimmed.contains('\0') {
        return Err(AnypkgError::Validation(format!(
            "Package name contains a NUL byte: {:?}",
            name
        )));
    }

    Ok(trimmed.to_string())
}

/// Validate a package list: at least one entry, every entry non-blank
pub fn validate_package_names(names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Err(AnypkgError::Validation("No packages specified".to_string()));
    }

    names.iter().map(|n| validate_package_name(n)).collect()
}

#[cfg(test)]
mod tests;
