// src/exec/backend.rs

//! Pluggable tool backend abstraction.
//!
//! The runner talks to a `ToolBackend` instead of spawning processes
//! itself, so tests can swap in a fake that records invocations and never
//! touches the OS.
//!
//! - `ProcessBackend` is the production implementation: it spawns the
//!   program with `tokio::process::Command` and captures both streams.

use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{MediajobError, Result};
use crate::job::Invocation;

/// Captured result of one child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait abstracting how a tool invocation is executed.
pub trait ToolBackend: Send + Sync {
    /// Run the invocation to completion and return its captured output.
    ///
    /// A non-zero exit is *not* an error at this level; only failures to
    /// spawn or wait are.
    fn invoke<'a>(
        &'a self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>>;
}

/// Real backend used in production.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ToolBackend for ProcessBackend {
    fn invoke<'a>(
        &'a self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(run_process(invocation))
    }
}

async fn run_process(invocation: &Invocation) -> Result<ProcessOutput> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = &invocation.cwd {
        cmd.current_dir(dir);
    }

    info!(
        tool = %invocation.tool,
        program = %invocation.program,
        cwd = ?invocation.cwd,
        "spawning tool process"
    );

    let output = cmd
        .output()
        .await
        .map_err(|err| spawn_error(invocation, err))?;

    let result = ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    for line in result.stderr.lines() {
        debug!(tool = %invocation.tool, "stderr: {}", line);
    }

    info!(
        tool = %invocation.tool,
        exit_code = ?result.exit_code,
        success = result.success(),
        "tool process exited"
    );

    Ok(result)
}

fn spawn_error(invocation: &Invocation, err: std::io::Error) -> MediajobError {
    if err.kind() == ErrorKind::NotFound {
        MediajobError::ToolNotFound {
            tool: invocation.tool,
            program: invocation.program.clone(),
            cwd: invocation
                .cwd
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| ".".to_string()),
        }
    } else {
        MediajobError::UnexpectedFailure {
            tool: invocation.tool,
            source: err,
        }
    }
}
