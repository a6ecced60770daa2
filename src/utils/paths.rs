use crate::error::{AnypkgError, Result};
use crate::project_identity;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Configuration directory: `$ANYPKG_CONFIG_DIR`, else the platform default
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(project_identity::env_key("CONFIG_DIR"))
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let name = project_identity::CONFIG_DIR_NAME;
    let proj = ProjectDirs::from("org", name, name).ok_or_else(|| {
        AnypkgError::ConfigError("Could not determine config directory".to_string())
    })?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_BASENAME))
}
