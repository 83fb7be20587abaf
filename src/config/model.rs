// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [tools]
/// python = "python3"
/// ffmpeg = "/usr/bin/ffmpeg"
/// facefusion_dir = "/opt/facefusion"
/// musetalk_dir = "/opt/musetalk"
///
/// [facefusion]
/// headless = true
/// extra_args = ["--execution-providers", "cuda"]
///
/// [musetalk]
/// bbox_shift = 0
///
/// [transcode]
/// audio_sample_rate = 44100
/// audio_channels = 2
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub tools: ToolsSection,

    #[serde(default)]
    pub facefusion: FaceFusionSection,

    #[serde(default)]
    pub musetalk: MuseTalkSection,

    #[serde(default)]
    pub transcode: TranscodeSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// (see `validate.rs`) or the loader.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub tools: ToolsSection,
    pub facefusion: FaceFusionSection,
    pub musetalk: MuseTalkSection,
    pub transcode: TranscodeSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            tools: raw.tools,
            facefusion: raw.facefusion,
            musetalk: raw.musetalk,
            transcode: raw.transcode,
        }
    }
}

/// `[tools]` section: where the external executables live.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsSection {
    /// Interpreter used to launch FaceFusion and MuseTalk.
    #[serde(default = "default_python")]
    pub python: String,

    /// Transcoder executable.
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,

    /// FaceFusion checkout; used as the working directory.
    #[serde(default = "default_facefusion_dir")]
    pub facefusion_dir: PathBuf,

    /// MuseTalk checkout; used as the working directory.
    #[serde(default = "default_musetalk_dir")]
    pub musetalk_dir: PathBuf,
}

fn default_python() -> String {
    "python".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

fn default_facefusion_dir() -> PathBuf {
    PathBuf::from("/opt/facefusion")
}

fn default_musetalk_dir() -> PathBuf {
    PathBuf::from("/opt/musetalk")
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            python: default_python(),
            ffmpeg: default_ffmpeg(),
            facefusion_dir: default_facefusion_dir(),
            musetalk_dir: default_musetalk_dir(),
        }
    }
}

/// `[facefusion]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct FaceFusionSection {
    /// Pass `--headless`. FaceFusion opens its UI otherwise.
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Appended verbatim after the generated arguments.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for FaceFusionSection {
    fn default() -> Self {
        Self {
            headless: true,
            extra_args: Vec::new(),
        }
    }
}

/// `[musetalk]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MuseTalkSection {
    /// Vertical shift of the face bounding box, written into the inference
    /// config.
    #[serde(default)]
    pub bbox_shift: i32,
}

/// `[transcode]` section: parameters for the transcoder-only jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeSection {
    #[serde(default = "default_audio_sample_rate")]
    pub audio_sample_rate: u32,

    #[serde(default = "default_audio_channels")]
    pub audio_channels: u8,
}

fn default_audio_sample_rate() -> u32 {
    44_100
}

fn default_audio_channels() -> u8 {
    2
}

impl Default for TranscodeSection {
    fn default() -> Self {
        Self {
            audio_sample_rate: default_audio_sample_rate(),
            audio_channels: default_audio_channels(),
        }
    }
}
