// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::env::{CONFIG_PATH_VAR, apply_env_overrides};
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{MediajobError, Result};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// No environment overrides are applied here; see [`resolve_config`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Default config file name, looked up in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Mediajob.toml")
}

/// Build the effective configuration for a run.
///
/// File selection:
/// - `explicit` (from `--config`) must exist.
/// - otherwise `MEDIAJOB_CONFIG`, which must exist when set.
/// - otherwise `Mediajob.toml` if present, else built-in defaults.
///
/// Environment overrides are applied on top of the file, then the result is
/// validated.
pub fn resolve_config<F>(explicit: Option<&Path>, lookup: F) -> Result<ConfigFile>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = lookup(CONFIG_PATH_VAR)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    let required = explicit.map(Path::to_path_buf).or(from_env);

    let mut raw = match required {
        Some(path) => {
            if !path.is_file() {
                return Err(MediajobError::ConfigError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "loading config file");
            load_from_path(&path)?
        }
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = %path.display(), "loading default config file");
                load_from_path(&path)?
            } else {
                debug!("no config file, using built-in defaults");
                RawConfigFile::default()
            }
        }
    };

    apply_env_overrides(&mut raw, lookup);
    ConfigFile::try_from(raw)
}
