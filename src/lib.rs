// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod job;
pub mod logging;
pub mod report;

use std::io::Write;

use tracing::{debug, error};

use crate::cli::{CliArgs, Command};
use crate::config::env::process_env;
use crate::config::resolve_config;
use crate::errors::Result;
use crate::exec::{JobRunner, ProcessBackend, ToolBackend};
use crate::fs::{FileSystem, RealFileSystem};
use crate::job::JobResult;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + env overrides)
/// - the process backend and real filesystem
/// - the job runner
///
/// The report is written to stdout. Any error is returned after its report
/// lines have been written.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), process_env)?;
    let base_dir = std::env::current_dir()?;

    let runner = JobRunner::new(ProcessBackend::new(), RealFileSystem, config, base_dir);

    let mut stdout = std::io::stdout();
    execute(&runner, &args.command, args.dry_run, &mut stdout).await
}

/// Execute one CLI command against a runner, writing the report to `out`.
pub async fn execute<B, F, W>(
    runner: &JobRunner<B, F>,
    command: &Command,
    dry_run: bool,
    out: &mut W,
) -> Result<()>
where
    B: ToolBackend,
    F: FileSystem,
    W: Write,
{
    let Some(job) = command.to_job() else {
        report::write_config(out, runner.config())?;
        return Ok(());
    };

    let outcome = if dry_run {
        runner.plan(&job).map(|invocation| {
            debug!("dry-run complete (no execution)");
            report::write_dry_run(out, &job, &invocation)
        })
    } else {
        runner
            .run(&job)
            .await
            .and_then(JobResult::into_result)
            .map(|result| report::write_success(out, &job, &result))
    };

    match outcome {
        Ok(written) => {
            written?;
            Ok(())
        }
        Err(err) => {
            error!(kind = ?job.kind, error = %err, "job failed");
            report::write_failure(out, job.kind, &err)?;
            Err(err)
        }
    }
}
