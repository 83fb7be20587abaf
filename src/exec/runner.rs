// src/exec/runner.rs

//! The job runner: validate inputs, prepare the output location, invoke the
//! tool through a [`ToolBackend`], then check the declared output.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ConfigFile;
use crate::errors::{MediajobError, Result};
use crate::exec::backend::ToolBackend;
use crate::exec::command_line;
use crate::fs::FileSystem;
use crate::job::plan::SideFile;
use crate::job::{Invocation, Job, JobResult, build_invocation};

pub struct JobRunner<B, F> {
    backend: B,
    fs: F,
    config: ConfigFile,
    base_dir: PathBuf,
}

impl<B, F> JobRunner<B, F>
where
    B: ToolBackend,
    F: FileSystem,
{
    /// `base_dir` is what relative job paths are resolved against, normally
    /// the current working directory.
    pub fn new(backend: B, fs: F, config: ConfigFile, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            fs,
            config,
            base_dir: base_dir.into(),
        }
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Fail with `InputNotFound` for the first input that doesn't exist.
    pub fn validate_inputs(&self, job: &Job) -> Result<()> {
        for input in &job.inputs {
            let path = self.resolve(&input.path);
            if !self.fs.exists(&path) {
                return Err(MediajobError::InputNotFound {
                    role: input.role,
                    path: input.path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate inputs and build the invocation without running anything.
    pub fn plan(&self, job: &Job) -> Result<Invocation> {
        self.validate_inputs(job)?;
        build_invocation(job, &self.config, &self.base_dir)
    }

    /// Run one job to completion.
    ///
    /// Returns `Ok` whenever the tool actually ran, including a non-zero
    /// exit; use [`JobResult::into_result`] to turn that into an error.
    /// Missing inputs fail before the backend is called.
    pub async fn run(&self, job: &Job) -> Result<JobResult> {
        let invocation = self.plan(job)?;

        if let Some(dir) = invocation.output.parent() {
            if !self.fs.is_dir(dir) {
                debug!(dir = %dir.display(), "creating output directory");
                self.fs.create_dir_all(dir)?;
            }
        }

        info!(
            kind = ?job.kind,
            command = %command_line::render_with_cwd(&invocation),
            "running job"
        );

        let _side_file = match &invocation.side_file {
            Some(side) => Some(SideFileGuard::write(&self.fs, side)?),
            None => None,
        };

        let output = self.backend.invoke(&invocation).await?;
        let output_exists = self.fs.exists(&invocation.output);

        if output.success() && !output_exists {
            warn!(
                tool = %invocation.tool,
                output = %invocation.output.display(),
                "tool exited 0 but output file is missing"
            );
        }

        Ok(JobResult {
            tool: invocation.tool,
            output: invocation.output,
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            output_exists,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Removes a side file when dropped, whatever the run outcome.
struct SideFileGuard<'a, F: FileSystem> {
    fs: &'a F,
    path: PathBuf,
}

impl<'a, F: FileSystem> SideFileGuard<'a, F> {
    fn write(fs: &'a F, side: &SideFile) -> Result<Self> {
        debug!(path = %side.path.display(), "writing side file");
        fs.write(&side.path, side.contents.as_bytes())?;
        Ok(Self {
            fs,
            path: side.path.clone(),
        })
    }
}

impl<F: FileSystem> Drop for SideFileGuard<'_, F> {
    fn drop(&mut self) {
        if self.fs.exists(&self.path) {
            if let Err(err) = self.fs.remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %err, "failed to remove side file");
            }
        }
    }
}
