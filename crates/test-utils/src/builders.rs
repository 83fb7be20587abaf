#![allow(dead_code)]

use std::path::PathBuf;

use mediajob::config::{ConfigFile, RawConfigFile};
use mediajob::exec::{JobRunner, ToolBackend};
use mediajob::fs::mock::MockFileSystem;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn python(mut self, program: &str) -> Self {
        self.config.tools.python = program.to_string();
        self
    }

    pub fn ffmpeg(mut self, program: &str) -> Self {
        self.config.tools.ffmpeg = program.to_string();
        self
    }

    pub fn facefusion_dir(mut self, dir: &str) -> Self {
        self.config.tools.facefusion_dir = PathBuf::from(dir);
        self
    }

    pub fn musetalk_dir(mut self, dir: &str) -> Self {
        self.config.tools.musetalk_dir = PathBuf::from(dir);
        self
    }

    pub fn bbox_shift(mut self, shift: i32) -> Self {
        self.config.musetalk.bbox_shift = shift;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Working directory the mock-backed runners resolve relative paths against.
pub const MOCK_BASE_DIR: &str = "/work";

/// Runner over a mock filesystem rooted at [`MOCK_BASE_DIR`].
pub fn mock_runner<B: ToolBackend>(
    backend: B,
    fs: MockFileSystem,
    config: ConfigFile,
) -> JobRunner<B, MockFileSystem> {
    fs.add_dir(MOCK_BASE_DIR);
    JobRunner::new(backend, fs, config, MOCK_BASE_DIR)
}
