// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{MediajobError, Result};

const MAX_AUDIO_CHANNELS: u8 = 8;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::MediajobError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tools(cfg)?;
    validate_facefusion(cfg)?;
    validate_transcode(cfg)?;
    Ok(())
}

fn validate_tools(cfg: &RawConfigFile) -> Result<()> {
    let programs = [("python", &cfg.tools.python), ("ffmpeg", &cfg.tools.ffmpeg)];
    for (key, value) in programs {
        if value.trim().is_empty() {
            return Err(MediajobError::ConfigError(format!(
                "[tools].{} must not be empty",
                key
            )));
        }
    }

    let dirs = [
        ("facefusion_dir", &cfg.tools.facefusion_dir),
        ("musetalk_dir", &cfg.tools.musetalk_dir),
    ];
    for (key, value) in dirs {
        if value.as_os_str().is_empty() {
            return Err(MediajobError::ConfigError(format!(
                "[tools].{} must not be empty",
                key
            )));
        }
    }

    Ok(())
}

fn validate_facefusion(cfg: &RawConfigFile) -> Result<()> {
    if let Some(arg) = cfg
        .facefusion
        .extra_args
        .iter()
        .find(|a| is_generated_facefusion_flag(a))
    {
        return Err(MediajobError::ConfigError(format!(
            "[facefusion].extra_args must not repeat generated flag '{}'",
            arg
        )));
    }
    Ok(())
}

fn is_generated_facefusion_flag(arg: &str) -> bool {
    matches!(arg, "--source" | "--target" | "--output")
}

fn validate_transcode(cfg: &RawConfigFile) -> Result<()> {
    if cfg.transcode.audio_sample_rate == 0 {
        return Err(MediajobError::ConfigError(
            "[transcode].audio_sample_rate must be >= 1 (got 0)".to_string(),
        ));
    }

    let channels = cfg.transcode.audio_channels;
    if channels == 0 || channels > MAX_AUDIO_CHANNELS {
        return Err(MediajobError::ConfigError(format!(
            "[transcode].audio_channels must be in 1..={} (got {})",
            MAX_AUDIO_CHANNELS, channels
        )));
    }

    Ok(())
}
