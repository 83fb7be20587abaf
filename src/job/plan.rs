// src/job/plan.rs

//! Argument-vector construction for each job kind.
//!
//! Every path handed to a tool is made absolute against `base_dir` first:
//! FaceFusion and MuseTalk run with their install directory as working
//! directory, so relative paths from the caller would resolve wrongly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::job::{InputRole, Job, JobKind, Tool};

/// A fully resolved tool command, ready to hand to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub program: String,
    pub args: Vec<OsString>,
    /// Working directory for the child; `None` inherits ours.
    pub cwd: Option<PathBuf>,
    /// Absolute output path the runner checks after the child exits.
    pub output: PathBuf,
    /// Side file the runner must write before spawning and remove after.
    pub side_file: Option<SideFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideFile {
    pub path: PathBuf,
    pub contents: String,
}

/// MuseTalk inference config, serialized to YAML.
#[derive(Debug, Clone, Serialize)]
struct InferenceConfig {
    video_path: String,
    audio_path: String,
    bbox_shift: i32,
    result_dir: String,
}

/// Build the invocation for `job` under `cfg`.
///
/// Inputs are expected to have been validated already; a missing role here
/// yields an empty path rather than an error.
pub fn build_invocation(job: &Job, cfg: &ConfigFile, base_dir: &Path) -> Result<Invocation> {
    let input = |role: InputRole| absolutize(base_dir, job.input(role).unwrap_or(Path::new("")));
    let output = absolutize(base_dir, &job.output);

    let invocation = match job.kind {
        JobKind::FaceSwap => {
            let mut args: Vec<OsString> = vec![
                "facefusion.py".into(),
                "run".into(),
                "--source".into(),
                input(InputRole::SourceImage).into(),
                "--target".into(),
                input(InputRole::TargetVideo).into(),
                "--output".into(),
                output.clone().into(),
            ];
            if cfg.facefusion.headless {
                args.push("--headless".into());
            }
            args.extend(cfg.facefusion.extra_args.iter().map(OsString::from));

            Invocation {
                tool: Tool::FaceFusion,
                program: cfg.tools.python.clone(),
                args,
                cwd: Some(cfg.tools.facefusion_dir.clone()),
                output,
                side_file: None,
            }
        }

        JobKind::LipSync => {
            let result_dir = absolutize(base_dir, &job.output_dir());
            let config_path = inference_config_path(&result_dir, &job.output);

            let inference = InferenceConfig {
                video_path: input(InputRole::InputVideo).to_string_lossy().into_owned(),
                audio_path: input(InputRole::AudioFile).to_string_lossy().into_owned(),
                bbox_shift: cfg.musetalk.bbox_shift,
                result_dir: result_dir.to_string_lossy().into_owned(),
            };
            let contents = serde_yaml::to_string(&inference)?;

            Invocation {
                tool: Tool::MuseTalk,
                program: cfg.tools.python.clone(),
                args: vec![
                    "-m".into(),
                    "scripts.inference".into(),
                    "--inference_config".into(),
                    config_path.clone().into(),
                    "--result_dir".into(),
                    result_dir.into(),
                ],
                cwd: Some(cfg.tools.musetalk_dir.clone()),
                output,
                side_file: Some(SideFile {
                    path: config_path,
                    contents,
                }),
            }
        }

        JobKind::FaceSwapSimple => ffmpeg(
            cfg,
            vec![
                "-y".into(),
                "-i".into(),
                input(InputRole::TargetVideo).into(),
                "-c".into(),
                "copy".into(),
                output.clone().into(),
            ],
            output,
        ),

        JobKind::LipSyncSimple => ffmpeg(
            cfg,
            vec![
                "-y".into(),
                "-i".into(),
                input(InputRole::InputVideo).into(),
                "-i".into(),
                input(InputRole::AudioFile).into(),
                "-map".into(),
                "0:v:0".into(),
                "-map".into(),
                "1:a:0".into(),
                "-c:v".into(),
                "copy".into(),
                "-c:a".into(),
                "aac".into(),
                "-shortest".into(),
                output.clone().into(),
            ],
            output,
        ),

        JobKind::ExtractAudio => ffmpeg(
            cfg,
            vec![
                "-y".into(),
                "-i".into(),
                input(InputRole::InputVideo).into(),
                "-vn".into(),
                "-acodec".into(),
                "pcm_s16le".into(),
                "-ar".into(),
                cfg.transcode.audio_sample_rate.to_string().into(),
                "-ac".into(),
                cfg.transcode.audio_channels.to_string().into(),
                output.clone().into(),
            ],
            output,
        ),
    };

    Ok(invocation)
}

fn ffmpeg(cfg: &ConfigFile, args: Vec<OsString>, output: PathBuf) -> Invocation {
    Invocation {
        tool: Tool::Ffmpeg,
        program: cfg.tools.ffmpeg.clone(),
        args,
        cwd: None,
        output,
        side_file: None,
    }
}

fn absolutize(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// `<result_dir>/.<output-stem>.inference.yaml`
fn inference_config_path(result_dir: &Path, output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    result_dir.join(format!(".{stem}.inference.yaml"))
}
