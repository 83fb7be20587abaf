// tests/cli_exit_status.rs
//
// Runs the built binary and checks exit status plus the report streams.
// Scripts are written before the first spawn and every case runs in one
// test, so no fork can inherit a script that is still open for writing.

#![cfg(unix)]

use mediajob_test_utils::scripts::{COPY_TOOL, FAILING_TOOL, write_script};

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use mediajob::config::env::{
    CONFIG_PATH_VAR, FACEFUSION_PATH_VAR, FFMPEG_VAR, MUSETALK_PATH_VAR, PYTHON_VAR,
};

type TestResult = Result<(), Box<dyn Error>>;

/// Run `mediajob` in `dir` with no config file and only the given tool
/// override in the environment.
fn mediajob(dir: &Path, ffmpeg: Option<&Path>, args: &[&str]) -> std::io::Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mediajob"));
    cmd.current_dir(dir).args(args);
    for var in [
        CONFIG_PATH_VAR,
        FACEFUSION_PATH_VAR,
        MUSETALK_PATH_VAR,
        PYTHON_VAR,
        FFMPEG_VAR,
    ] {
        cmd.env_remove(var);
    }
    if let Some(ffmpeg) = ffmpeg {
        cmd.env(FFMPEG_VAR, ffmpeg);
    }
    cmd.output()
}

#[test]
fn exit_status_follows_job_outcome() -> TestResult {
    let dir = tempfile::tempdir()?;
    let copy_tool = write_script(dir.path(), "copy-tool.sh", COPY_TOOL)?;
    let failing_tool = write_script(dir.path(), "failing-tool.sh", FAILING_TOOL)?;
    fs::write(dir.path().join("face.jpg"), b"jpg")?;
    fs::write(dir.path().join("clip.mp4"), b"not really a video")?;

    // Missing source image: rejected before any tool runs.
    let out = mediajob(
        dir.path(),
        Some(&copy_tool),
        &[
            "face-swap",
            "--simple",
            "--source",
            "missing.jpg",
            "--target",
            "clip.mp4",
            "--output",
            "out/missing.mp4",
        ],
    )?;
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("Source image not found"), "stdout: {stdout}");
    assert!(!dir.path().join("out").exists());

    // Failing transcoder: exit 1, captured stderr is reported once.
    let out = mediajob(
        dir.path(),
        Some(&failing_tool),
        &["extract-audio", "--video", "clip.mp4", "--output", "audio/out.wav"],
    )?;
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("stderr: Unknown encoder"), "stdout: {stdout}");
    assert!(stdout.contains("Audio extraction failed"));
    assert!(stderr.contains("mediajob error: FFmpeg failed with exit status 1"));
    assert!(!stderr.contains("ToolInvocationFailed"), "stderr: {stderr}");

    // Copying transcoder: exit 0 and the output is written.
    let out = mediajob(
        dir.path(),
        Some(&copy_tool),
        &[
            "face-swap",
            "--simple",
            "--source",
            "face.jpg",
            "--target",
            "clip.mp4",
            "--output",
            "results/swapped.mp4",
        ],
    )?;
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.contains("Face swap completed successfully"), "stdout: {stdout}");
    assert_eq!(fs::read(dir.path().join("results/swapped.mp4"))?, b"not really a video");

    Ok(())
}
