// src/config/mod.rs

//! Configuration loading and validation for mediajob.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Apply environment-variable overrides (`env.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod env;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_config};
pub use model::{
    ConfigFile, FaceFusionSection, MuseTalkSection, RawConfigFile, ToolsSection, TranscodeSection,
};
