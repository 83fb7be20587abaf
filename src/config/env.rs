// src/config/env.rs

//! Environment-variable overrides for tool locations.
//!
//! Overrides are applied on top of the file config (or the built-in
//! defaults) before validation. Empty values are treated as unset.

use std::path::PathBuf;

use tracing::debug;

use crate::config::model::RawConfigFile;

pub const FACEFUSION_PATH_VAR: &str = "FACEFUSION_PATH";
pub const MUSETALK_PATH_VAR: &str = "MUSETALK_PATH";
pub const PYTHON_VAR: &str = "MEDIAJOB_PYTHON";
pub const FFMPEG_VAR: &str = "MEDIAJOB_FFMPEG";
pub const CONFIG_PATH_VAR: &str = "MEDIAJOB_CONFIG";

/// Read a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply tool-location overrides using `lookup` to read variables.
///
/// `lookup` is injected so tests don't have to mutate the process
/// environment.
pub fn apply_env_overrides<F>(raw: &mut RawConfigFile, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = get(FACEFUSION_PATH_VAR) {
        debug!(var = FACEFUSION_PATH_VAR, value = %dir, "env override");
        raw.tools.facefusion_dir = PathBuf::from(dir);
    }
    if let Some(dir) = get(MUSETALK_PATH_VAR) {
        debug!(var = MUSETALK_PATH_VAR, value = %dir, "env override");
        raw.tools.musetalk_dir = PathBuf::from(dir);
    }
    if let Some(python) = get(PYTHON_VAR) {
        debug!(var = PYTHON_VAR, value = %python, "env override");
        raw.tools.python = python;
    }
    if let Some(ffmpeg) = get(FFMPEG_VAR) {
        debug!(var = FFMPEG_VAR, value = %ffmpeg, "env override");
        raw.tools.ffmpeg = ffmpeg;
    }
}
