// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

use crate::job::{InputRole, Tool};

#[derive(Error, Debug)]
pub enum MediajobError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An input file was missing; raised before any tool is spawned.
    #[error("{} not found: {}", capitalize(.role.label()), .path.display())]
    InputNotFound { role: InputRole, path: PathBuf },

    #[error("{tool} executable not found: {program} (cwd: {cwd})")]
    ToolNotFound {
        tool: Tool,
        program: String,
        cwd: String,
    },

    /// The tool ran and exited non-zero. Captured streams are kept so the
    /// caller can surface them.
    #[error("{tool} failed with exit status {}", exit_code_label(.exit_code))]
    ToolInvocationFailed {
        tool: Tool,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("{tool} exited successfully but no output was written to {}", .path.display())]
    OutputMissing { tool: Tool, path: PathBuf },

    #[error("Unexpected error in {tool}: {source}")]
    UnexpectedFailure {
        tool: Tool,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MediajobError>;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_message_names_role_and_path() {
        let err = MediajobError::InputNotFound {
            role: InputRole::SourceImage,
            path: PathBuf::from("/tmp/face.jpg"),
        };
        assert_eq!(err.to_string(), "Source image not found: /tmp/face.jpg");
    }

    #[test]
    fn invocation_failed_without_code_mentions_signal() {
        let err = MediajobError::ToolInvocationFailed {
            tool: Tool::Ffmpeg,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
