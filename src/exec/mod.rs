// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ToolBackend` trait and the production
//!   `ProcessBackend` built on `tokio::process::Command`; tests replace it
//!   with a fake.
//! - [`runner`] owns `JobRunner`, which validates a job, prepares its output
//!   location and hands the invocation to a backend.
//! - [`command_line`] renders invocations for logs and `--dry-run`.

pub mod backend;
pub mod command_line;
pub mod runner;

pub use backend::{ProcessBackend, ProcessOutput, ToolBackend};
pub use runner::JobRunner;
