// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskshimError};

/// Environment variable overriding the project file location.
pub const CONFIG_ENV_VAR: &str = "TASKSHIM_CONFIG";

/// Load a project file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to also
/// check the flag schema.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        TaskshimError::Config(format!("cannot read project file '{}': {e}", path.display()))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), flags = config.flag.len(), "project file loaded");

    Ok(config)
}

/// Load a project file from path and validate it.
///
/// Schema problems (malformed or colliding flags) come back as
/// `TaskshimError::Schema`, blank commands as `TaskshimError::Config`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// `$TASKSHIM_CONFIG` if set and non-empty, else `Taskshim.toml` in the
/// current working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from("Taskshim.toml"),
    }
}
