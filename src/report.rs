// src/report.rs

//! User-facing report lines. These go to stdout; diagnostics go through
//! `tracing` to stderr.

use std::io::{self, Write};

use crate::config::ConfigFile;
use crate::errors::MediajobError;
use crate::exec::command_line;
use crate::job::{Invocation, Job, JobKind, JobResult};

pub fn write_success<W: Write>(out: &mut W, job: &Job, result: &JobResult) -> io::Result<()> {
    writeln!(out, "{} completed successfully", result.tool)?;
    let stdout = result.stdout.trim_end();
    if !stdout.is_empty() {
        writeln!(out, "Output: {stdout}")?;
    }
    let stderr = result.stderr.trim_end();
    if !stderr.is_empty() {
        writeln!(out, "Warnings: {stderr}")?;
    }
    writeln!(
        out,
        "{} completed successfully: {}",
        job.kind.label(),
        result.output().display()
    )
}

pub fn write_failure<W: Write>(out: &mut W, kind: JobKind, err: &MediajobError) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    if let MediajobError::ToolInvocationFailed { stdout, stderr, .. } = err {
        writeln!(out, "stdout: {}", stdout.trim_end())?;
        writeln!(out, "stderr: {}", stderr.trim_end())?;
    }
    writeln!(out, "{} failed", kind.label())
}

pub fn write_dry_run<W: Write>(out: &mut W, job: &Job, invocation: &Invocation) -> io::Result<()> {
    writeln!(out, "mediajob dry-run")?;
    writeln!(out, "  job: {}", job.kind.label())?;
    writeln!(out, "  tool: {}", invocation.tool)?;
    writeln!(out, "  command: {}", command_line::render_with_cwd(invocation))?;
    writeln!(out, "  output: {}", invocation.output.display())?;
    if let Some(side) = &invocation.side_file {
        writeln!(out, "  inference config: {}", side.path.display())?;
        for line in side.contents.lines() {
            writeln!(out, "      {line}")?;
        }
    }
    Ok(())
}

pub fn write_config<W: Write>(out: &mut W, cfg: &ConfigFile) -> io::Result<()> {
    writeln!(out, "mediajob config")?;
    writeln!(out, "  tools.python = {}", cfg.tools.python)?;
    writeln!(out, "  tools.ffmpeg = {}", cfg.tools.ffmpeg)?;
    writeln!(out, "  tools.facefusion_dir = {}", cfg.tools.facefusion_dir.display())?;
    writeln!(out, "  tools.musetalk_dir = {}", cfg.tools.musetalk_dir.display())?;
    writeln!(out, "  facefusion.headless = {}", cfg.facefusion.headless)?;
    if !cfg.facefusion.extra_args.is_empty() {
        writeln!(out, "  facefusion.extra_args = {:?}", cfg.facefusion.extra_args)?;
    }
    writeln!(out, "  musetalk.bbox_shift = {}", cfg.musetalk.bbox_shift)?;
    writeln!(out, "  transcode.audio_sample_rate = {}", cfg.transcode.audio_sample_rate)?;
    writeln!(out, "  transcode.audio_channels = {}", cfg.transcode.audio_channels)
}
