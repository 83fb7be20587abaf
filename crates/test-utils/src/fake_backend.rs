use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use mediajob::errors::{MediajobError, Result};
use mediajob::exec::{ProcessOutput, ToolBackend};
use mediajob::fs::FileSystem;
use mediajob::fs::mock::MockFileSystem;
use mediajob::job::Invocation;

/// What the fake tool does when invoked.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    /// Exit with `code`; write the declared output file if `write_output`.
    Exit { code: i32, write_output: bool },
    /// Act as if the program doesn't exist.
    NotFound,
}

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub invocation: Invocation,
    /// Whether the invocation's side file existed while the "tool" ran.
    pub side_file_present: bool,
}

/// A fake tool backend that:
/// - records every invocation it receives
/// - writes the output file into a shared `MockFileSystem` on success
/// - never spawns a process.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    fs: MockFileSystem,
    outcome: FakeOutcome,
    stdout: String,
    stderr: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeBackend {
    /// Succeeds and writes the output file.
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            fs,
            outcome: FakeOutcome::Exit {
                code: 0,
                write_output: true,
            },
            stdout: String::new(),
            stderr: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn outcome(mut self, outcome: FakeOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn exit_code(self, code: i32) -> Self {
        self.outcome(FakeOutcome::Exit {
            code,
            write_output: code == 0,
        })
    }

    pub fn stdout(mut self, text: &str) -> Self {
        self.stdout = text.to_string();
        self
    }

    pub fn stderr(mut self, text: &str) -> Self {
        self.stderr = text.to_string();
        self
    }

    /// Shared handle to the recorded calls; stays valid after the backend
    /// has been moved into a runner.
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }
}

impl ToolBackend for FakeBackend {
    fn invoke<'a>(
        &'a self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(async move {
            let side_file_present = invocation
                .side_file
                .as_ref()
                .is_some_and(|side| self.fs.is_file(&side.path));

            self.calls.lock().unwrap().push(RecordedCall {
                invocation: invocation.clone(),
                side_file_present,
            });

            match self.outcome {
                FakeOutcome::NotFound => Err(MediajobError::ToolNotFound {
                    tool: invocation.tool,
                    program: invocation.program.clone(),
                    cwd: ".".to_string(),
                }),
                FakeOutcome::Exit { code, write_output } => {
                    if write_output {
                        self.fs
                            .write(&invocation.output, b"fake media")
                            .map_err(MediajobError::from)?;
                    }
                    Ok(ProcessOutput {
                        exit_code: Some(code),
                        stdout: self.stdout.clone(),
                        stderr: self.stderr.clone(),
                    })
                }
            }
        })
    }
}
