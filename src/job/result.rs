// src/job/result.rs

use std::path::{Path, PathBuf};

use crate::errors::{MediajobError, Result};
use crate::job::Tool;

/// Outcome of one tool run.
///
/// `success()` is derived, never stored: a run counts as successful only
/// when the process exited with status zero *and* the output file exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub tool: Tool,
    pub output: PathBuf,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub output_exists: bool,
}

impl JobResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && self.output_exists
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Convert a failed result into the matching error, keeping the
    /// captured streams for a non-zero exit.
    pub fn into_result(self) -> Result<JobResult> {
        if self.exit_code != Some(0) {
            return Err(MediajobError::ToolInvocationFailed {
                tool: self.tool,
                exit_code: self.exit_code,
                stdout: self.stdout,
                stderr: self.stderr,
            });
        }
        if !self.output_exists {
            return Err(MediajobError::OutputMissing {
                tool: self.tool,
                path: self.output,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: Option<i32>, output_exists: bool) -> JobResult {
        JobResult {
            tool: Tool::Ffmpeg,
            output: PathBuf::from("out.mp4"),
            exit_code,
            stdout: "out".to_string(),
            stderr: "err".to_string(),
            output_exists,
        }
    }

    #[test]
    fn success_needs_zero_exit_and_output() {
        assert!(result(Some(0), true).success());
        assert!(!result(Some(0), false).success());
        assert!(!result(Some(1), true).success());
        assert!(!result(None, true).success());
    }

    #[test]
    fn non_zero_exit_keeps_captured_streams() {
        match result(Some(2), false).into_result() {
            Err(MediajobError::ToolInvocationFailed {
                exit_code, stderr, ..
            }) => {
                assert_eq!(exit_code, Some(2));
                assert_eq!(stderr, "err");
            }
            other => panic!("expected ToolInvocationFailed, got {:?}", other),
        }
    }

    #[test]
    fn zero_exit_without_output_is_output_missing() {
        assert!(matches!(
            result(Some(0), false).into_result(),
            Err(MediajobError::OutputMissing { .. })
        ));
    }
}
