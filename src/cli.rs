// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::job::Job;

/// Command-line arguments for `mediajob`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mediajob",
    version,
    about = "Run face-swap, lip-sync and transcode jobs through external media tools.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `MEDIAJOB_CONFIG` or `Mediajob.toml` is used when present;
    /// otherwise built-in defaults apply.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MEDIAJOB_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate inputs and print the tool command, but don't run it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Swap the face from an image into a video (FaceFusion).
    FaceSwap {
        /// Path to source face image.
        #[arg(long, value_name = "IMAGE")]
        source: PathBuf,

        /// Path to target video.
        #[arg(long, value_name = "VIDEO")]
        target: PathBuf,

        /// Path to output video.
        #[arg(long, value_name = "PATH")]
        output: PathBuf,

        /// Skip FaceFusion and copy the target video with the transcoder.
        #[arg(long)]
        simple: bool,
    },

    /// Lip-sync a video to an audio track (MuseTalk).
    LipSync {
        /// Path to input video.
        #[arg(long, value_name = "VIDEO")]
        video: PathBuf,

        /// Path to audio file.
        #[arg(long, value_name = "AUDIO")]
        audio: PathBuf,

        /// Path to output video.
        #[arg(long, value_name = "PATH")]
        output: PathBuf,

        /// Skip MuseTalk and mux the audio onto the video with the transcoder.
        #[arg(long)]
        simple: bool,
    },

    /// Extract a PCM WAV audio track from a video.
    ExtractAudio {
        /// Path to input video.
        #[arg(long, value_name = "VIDEO")]
        video: PathBuf,

        /// Path to output audio file.
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Print the effective tool configuration and exit.
    ShowConfig,
}

impl Command {
    /// Turn a job subcommand into a [`Job`]. `ShowConfig` has no job.
    pub fn to_job(&self) -> Option<Job> {
        match self {
            Command::FaceSwap {
                source,
                target,
                output,
                simple,
            } => Some(Job::face_swap(source, target, output, *simple)),
            Command::LipSync {
                video,
                audio,
                output,
                simple,
            } => Some(Job::lip_sync(video, audio, output, *simple)),
            Command::ExtractAudio { video, output } => Some(Job::extract_audio(video, output)),
            Command::ShowConfig => None,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
