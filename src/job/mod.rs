// src/job/mod.rs

//! Job data model.
//!
//! A [`Job`] is one execution request: the named inputs, the output path and
//! which wrapper handles it. Jobs are built per invocation and dropped on
//! exit; nothing here is persisted.
//!
//! - [`plan`] turns a job plus the effective config into an [`plan::Invocation`]
//!   (program, args, working directory).
//! - [`result`] holds [`JobResult`], the outcome of running one job.

pub mod plan;
pub mod result;

use std::fmt;
use std::path::{Path, PathBuf};

pub use plan::{Invocation, build_invocation};
pub use result::JobResult;

/// External tool a job is ultimately handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    FaceFusion,
    MuseTalk,
    Ffmpeg,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::FaceFusion => "FaceFusion",
            Tool::MuseTalk => "MuseTalk",
            Tool::Ffmpeg => "FFmpeg",
        };
        f.write_str(name)
    }
}

/// Which wrapper a job goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    FaceSwap,
    /// Transcoder copy of the target video; FaceFusion is not involved.
    FaceSwapSimple,
    LipSync,
    /// Transcoder mux of the video stream with the audio track.
    LipSyncSimple,
    ExtractAudio,
}

impl JobKind {
    pub fn tool(self) -> Tool {
        match self {
            JobKind::FaceSwap => Tool::FaceFusion,
            JobKind::LipSync => Tool::MuseTalk,
            JobKind::FaceSwapSimple | JobKind::LipSyncSimple | JobKind::ExtractAudio => {
                Tool::Ffmpeg
            }
        }
    }

    /// Human label used in the success/failure report lines.
    pub fn label(self) -> &'static str {
        match self {
            JobKind::FaceSwap | JobKind::FaceSwapSimple => "Face swap",
            JobKind::LipSync | JobKind::LipSyncSimple => "Lip sync",
            JobKind::ExtractAudio => "Audio extraction",
        }
    }
}

/// What an input path is for. Shows up in "not found" errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    SourceImage,
    TargetVideo,
    InputVideo,
    AudioFile,
}

impl InputRole {
    pub fn label(self) -> &'static str {
        match self {
            InputRole::SourceImage => "source image",
            InputRole::TargetVideo => "target video",
            InputRole::InputVideo => "input video",
            InputRole::AudioFile => "audio file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    pub role: InputRole,
    pub path: PathBuf,
}

impl JobInput {
    pub fn new(role: InputRole, path: impl AsRef<Path>) -> Self {
        Self {
            role,
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub kind: JobKind,
    pub inputs: Vec<JobInput>,
    pub output: PathBuf,
}

impl Job {
    pub fn face_swap(
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
        output: impl AsRef<Path>,
        simple: bool,
    ) -> Self {
        Self {
            kind: if simple {
                JobKind::FaceSwapSimple
            } else {
                JobKind::FaceSwap
            },
            inputs: vec![
                JobInput::new(InputRole::SourceImage, source),
                JobInput::new(InputRole::TargetVideo, target),
            ],
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn lip_sync(
        video: impl AsRef<Path>,
        audio: impl AsRef<Path>,
        output: impl AsRef<Path>,
        simple: bool,
    ) -> Self {
        Self {
            kind: if simple {
                JobKind::LipSyncSimple
            } else {
                JobKind::LipSync
            },
            inputs: vec![
                JobInput::new(InputRole::InputVideo, video),
                JobInput::new(InputRole::AudioFile, audio),
            ],
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn extract_audio(video: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            kind: JobKind::ExtractAudio,
            inputs: vec![JobInput::new(InputRole::InputVideo, video)],
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.kind.tool()
    }

    /// Path of the input with the given role, if the job has one.
    pub fn input(&self, role: InputRole) -> Option<&Path> {
        self.inputs
            .iter()
            .find(|i| i.role == role)
            .map(|i| i.path.as_path())
    }

    /// Directory the output lands in. A bare filename resolves to `.`.
    pub fn output_dir(&self) -> PathBuf {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_variants_use_the_transcoder() {
        assert_eq!(JobKind::FaceSwap.tool(), Tool::FaceFusion);
        assert_eq!(JobKind::LipSync.tool(), Tool::MuseTalk);
        assert_eq!(JobKind::FaceSwapSimple.tool(), Tool::Ffmpeg);
        assert_eq!(JobKind::LipSyncSimple.tool(), Tool::Ffmpeg);
    }

    #[test]
    fn output_dir_of_bare_filename_is_current_dir() {
        let job = Job::extract_audio("in.mp4", "out.wav");
        assert_eq!(job.output_dir(), PathBuf::from("."));

        let job = Job::extract_audio("in.mp4", "work/audio/out.wav");
        assert_eq!(job.output_dir(), PathBuf::from("work/audio"));
    }

    #[test]
    fn input_lookup_by_role() {
        let job = Job::lip_sync("v.mp4", "a.wav", "o.mp4", false);
        assert_eq!(job.input(InputRole::AudioFile), Some(Path::new("a.wav")));
        assert_eq!(job.input(InputRole::SourceImage), None);
    }
}
