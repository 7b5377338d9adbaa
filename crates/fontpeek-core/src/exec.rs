//! The process-execution seam.
//!
//! The preview handler never talks to `std::process` directly; it hands
//! an [`Invocation`](crate::invoke::Invocation) to a [`CommandRunner`].
//! Production uses the system runner in the `fontpeek` crate, tests
//! substitute a fake that returns canned output.

use crate::invoke::Invocation;

/// What came back from one finished tool call.
#[derive(Debug, Clone, Default)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit status code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

impl ExecOutput {
    /// Convenience constructor for a clean exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            status: Some(0),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Status code for error reporting; signal terminations report -1.
    pub fn status_code(&self) -> i32 {
        self.status.unwrap_or(-1)
    }
}

/// Executes one external tool call synchronously.
///
/// Implementations must not retry and must capture both output streams.
/// Spawn-level failures (binary missing, timeout) surface as
/// `std::io::Error`; a tool that ran but exited non-zero is a normal
/// [`ExecOutput`] with a non-zero status.
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> std::io::Result<ExecOutput>;
}
