// tests/fake_tool_scripts.rs
//
// End-to-end runs through the real process backend and filesystem, with a
// shell script standing in for the transcoder. Kept to a single test so no
// other test forks while a script is open for writing.

#![cfg(unix)]

use mediajob_test_utils::builders::ConfigFileBuilder;
use mediajob_test_utils::scripts::{COPY_TOOL, FAILING_TOOL, write_script};
use mediajob_test_utils::{init_tracing, with_timeout};

use std::error::Error;
use std::fs;

use mediajob::errors::MediajobError;
use mediajob::exec::{JobRunner, ProcessBackend};
use mediajob::fs::RealFileSystem;
use mediajob::job::Job;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn transcoder_script_end_to_end() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let copy_tool = write_script(dir.path(), "copy-tool.sh", COPY_TOOL)?;
    let failing_tool = write_script(dir.path(), "failing-tool.sh", FAILING_TOOL)?;

    let video = dir.path().join("clip.mp4");
    fs::write(&video, b"not really a video")?;
    let output = dir.path().join("nested/results/out.mp4");

    // Success: output directory is created and the output exists.
    let config = ConfigFileBuilder::new()
        .ffmpeg(&copy_tool.to_string_lossy())
        .build();
    let runner = JobRunner::new(ProcessBackend::new(), RealFileSystem, config, dir.path());
    let job = Job::face_swap(&video, &video, &output, true);

    let first = with_timeout(runner.run(&job)).await?;
    assert!(first.success(), "stderr: {}", first.stderr);
    assert!(first.stderr.contains("copying"));
    assert_eq!(fs::read(&output)?, b"not really a video");

    // Same job again: same outcome.
    let second = with_timeout(runner.run(&job)).await?;
    assert_eq!(first.exit_code, second.exit_code);
    assert!(second.success());

    // Failure: non-zero exit surfaces stderr.
    let config = ConfigFileBuilder::new()
        .ffmpeg(&failing_tool.to_string_lossy())
        .build();
    let runner = JobRunner::new(ProcessBackend::new(), RealFileSystem, config, dir.path());
    let job = Job::extract_audio(&video, dir.path().join("audio/out.wav"));

    match with_timeout(runner.run(&job)).await?.into_result() {
        Err(MediajobError::ToolInvocationFailed {
            exit_code, stderr, ..
        }) => {
            assert_eq!(exit_code, Some(1));
            assert!(stderr.contains("Unknown encoder"));
        }
        other => panic!("expected ToolInvocationFailed, got {:?}", other),
    }
    assert!(dir.path().join("audio").is_dir());

    Ok(())
}
