// tests/execute_report.rs

use mediajob_test_utils::builders::{ConfigFileBuilder, mock_runner};
use mediajob_test_utils::fake_backend::FakeBackend;
use mediajob_test_utils::init_tracing;

use std::error::Error;
use std::path::{Path, PathBuf};

use mediajob::cli::Command;
use mediajob::errors::MediajobError;
use mediajob::execute;
use mediajob::fs::FileSystem;
use mediajob::fs::mock::MockFileSystem;

type TestResult = Result<(), Box<dyn Error>>;

fn face_swap(source: &str, simple: bool) -> Command {
    Command::FaceSwap {
        source: PathBuf::from(source),
        target: PathBuf::from("/media/clip.mp4"),
        output: PathBuf::from("/out/result.mp4"),
        simple,
    }
}

fn fs_with_inputs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("/media/face.jpg", b"jpg".to_vec());
    fs.add_file("/media/clip.mp4", b"mp4".to_vec());
    fs
}

#[tokio::test]
async fn missing_input_is_reported_on_stdout() -> TestResult {
    init_tracing();

    let fs = fs_with_inputs();
    let backend = FakeBackend::new(fs.clone());
    let calls = backend.calls();
    let runner = mock_runner(backend, fs, ConfigFileBuilder::new().build());

    let mut out = Vec::new();
    let res = execute(&runner, &face_swap("/media/gone.jpg", false), false, &mut out).await;

    assert!(matches!(res, Err(MediajobError::InputNotFound { .. })));
    assert_eq!(
        String::from_utf8(out)?,
        "Error: Source image not found: /media/gone.jpg\nFace swap failed\n"
    );
    assert!(calls.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn success_report_names_output() -> TestResult {
    init_tracing();

    let fs = fs_with_inputs();
    let backend = FakeBackend::new(fs.clone()).stdout("Processing frames\n");
    let runner = mock_runner(backend, fs, ConfigFileBuilder::new().build());

    let mut out = Vec::new();
    execute(&runner, &face_swap("/media/face.jpg", false), false, &mut out).await?;

    let text = String::from_utf8(out)?;
    assert!(text.starts_with("FaceFusion completed successfully\n"));
    assert!(text.contains("Output: Processing frames\n"));
    assert!(text.ends_with("Face swap completed successfully: /out/result.mp4\n"));
    Ok(())
}

#[tokio::test]
async fn failing_tool_report_includes_stderr() -> TestResult {
    init_tracing();

    let fs = fs_with_inputs();
    let backend = FakeBackend::new(fs.clone())
        .exit_code(1)
        .stderr("Invalid data found when processing input");
    let runner = mock_runner(backend, fs, ConfigFileBuilder::new().build());

    let mut out = Vec::new();
    let res = execute(&runner, &face_swap("/media/face.jpg", true), false, &mut out).await;

    assert!(matches!(res, Err(MediajobError::ToolInvocationFailed { .. })));
    let text = String::from_utf8(out)?;
    assert!(text.contains("Error: FFmpeg failed with exit status 1\n"));
    assert!(text.contains("stderr: Invalid data found when processing input\n"));
    assert!(text.ends_with("Face swap failed\n"));
    Ok(())
}

#[tokio::test]
async fn dry_run_prints_command_without_running() -> TestResult {
    init_tracing();

    let fs = fs_with_inputs();
    let backend = FakeBackend::new(fs.clone());
    let calls = backend.calls();
    let runner = mock_runner(backend, fs.clone(), ConfigFileBuilder::new().build());

    let mut out = Vec::new();
    execute(&runner, &face_swap("/media/face.jpg", false), true, &mut out).await?;

    let text = String::from_utf8(out)?;
    assert!(text.contains(
        "command: cd /opt/facefusion && python facefusion.py run --source /media/face.jpg"
    ));
    assert!(calls.lock().unwrap().is_empty());
    assert!(!fs.exists(Path::new("/out")));
    Ok(())
}

#[tokio::test]
async fn dry_run_still_validates_inputs() -> TestResult {
    init_tracing();

    let fs = fs_with_inputs();
    let runner = mock_runner(FakeBackend::new(fs.clone()), fs, ConfigFileBuilder::new().build());

    let mut out = Vec::new();
    let res = execute(&runner, &face_swap("/media/gone.jpg", false), true, &mut out).await;

    assert!(matches!(res, Err(MediajobError::InputNotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn show_config_prints_effective_tools() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    let config = ConfigFileBuilder::new()
        .ffmpeg("/usr/local/bin/ffmpeg")
        .facefusion_dir("/srv/facefusion")
        .build();
    let runner = mock_runner(FakeBackend::new(fs.clone()), fs, config);

    let mut out = Vec::new();
    execute(&runner, &Command::ShowConfig, false, &mut out).await?;

    let text = String::from_utf8(out)?;
    assert!(text.contains("tools.ffmpeg = /usr/local/bin/ffmpeg\n"));
    assert!(text.contains("tools.facefusion_dir = /srv/facefusion\n"));
    assert!(text.contains("transcode.audio_sample_rate = 44100\n"));
    Ok(())
}
