//! System process execution with a bounded wait.
//!
//! [`SystemRunner`] spawns the tool with piped stdio and polls
//! `try_wait` against the deadline, killing the child on expiry. Output
//! is read after exit; both external tools emit at most a few lines, so
//! pipe buffers never fill before the process finishes.

use fontpeek_core::{CommandRunner, ExecOutput, Invocation};
use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// [`CommandRunner`] backed by `std::process`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExecOutput> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(limit) = self.timeout {
            let start = Instant::now();
            while child.try_wait()?.is_none() {
                if start.elapsed() >= limit {
                    log::warn!(
                        "killing {} after {limit:?}",
                        invocation.program.display()
                    );
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!(
                            "{} did not exit within {limit:?}",
                            invocation.program.display()
                        ),
                    ));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
        }

        let output = child.wait_with_output()?;
        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_of_a_clean_exit() {
        let runner = SystemRunner::new(Some(Duration::from_secs(5)));
        let inv = Invocation::new("echo").arg("hello");
        let out = runner.run(&inv).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn reports_nonzero_exit_status() {
        let runner = SystemRunner::new(Some(Duration::from_secs(5)));
        let inv = Invocation::new("sh").arg("-c").arg("echo oops >&2; exit 3");
        let out = runner.run(&inv).unwrap();
        assert_eq!(out.status, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn missing_binary_is_not_found() {
        let runner = SystemRunner::default();
        let inv = Invocation::new("/nonexistent/fontpeek-tool");
        let err = runner.run(&inv).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn hung_process_times_out() {
        let runner = SystemRunner::new(Some(Duration::from_millis(100)));
        let inv = Invocation::new("sleep").arg("5");
        let err = runner.run(&inv).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }
}
