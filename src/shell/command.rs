//! External command execution.
//!
//! Every check that needs outside information goes through a
//! [`CommandRunner`]. Failures to start a command are reported as a
//! [`CommandError`], separate from a command that ran and exited non-zero,
//! so callers decide explicitly what a missing tool means for them.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default time an external command may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failed output with the given exit code and stderr.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with code 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout followed by stderr.
    ///
    /// Some tools (older interpreters printing `--version`) write to stderr.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&self.stderr);
        }
        text
    }
}

/// Reasons a command could not produce a [`CommandOutput`].
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program does not exist on PATH.
    #[error("command not found: {program}")]
    NotFound { program: String },

    /// The program ran longer than the allowed timeout and was killed.
    #[error("command `{program}` timed out after {}s", .timeout.as_secs_f32())]
    TimedOut { program: String, timeout: Duration },

    /// Spawning or waiting on the program failed for another reason.
    #[error("failed to run `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    /// Whether the program itself is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandError::NotFound { .. })
    }
}

/// Capability to invoke an external program and capture its output.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout, stderr and exit code.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

/// Runs real processes with a bounded timeout.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SystemRunner {
    /// Create a runner that kills commands running longer than `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        tracing::debug!("Running `{} {}`", program, args.join(" "));

        // A timeout too large to represent means no deadline.
        let deadline = Instant::now().checked_add(self.timeout);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => CommandError::NotFound {
                    program: program.to_string(),
                },
                _ => CommandError::Io {
                    program: program.to_string(),
                    source,
                },
            })?;

        // Drain both pipes concurrently so a chatty child can't fill one
        // pipe buffer and block forever.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let timed_out = || {
            tracing::debug!("`{}` timed out after {:?}", program, self.timeout);
            CommandError::TimedOut {
                program: program.to_string(),
                timeout: self.timeout,
            }
        };

        match wait_until(&mut child, deadline) {
            Ok(Some(status)) => {
                // A backgrounded grandchild can keep the pipes open after the
                // child exits; the deadline still applies to reading them.
                let (Some(stdout), Some(stderr)) =
                    (collect(stdout, deadline), collect(stderr, deadline))
                else {
                    return Err(timed_out());
                };
                let output = CommandOutput {
                    exit_code: status.code(),
                    stdout,
                    stderr,
                };
                tracing::debug!("`{}` exited with {:?}", program, output.exit_code);
                Ok(output)
            }
            Ok(None) => {
                reap(&mut child);
                // Reader threads are detached: a grandchild may still hold the pipes.
                Err(timed_out())
            }
            Err(source) => {
                reap(&mut child);
                Err(CommandError::Io {
                    program: program.to_string(),
                    source,
                })
            }
        }
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Wait for a drained pipe. `None` means the deadline passed first.
fn collect(rx: Option<Receiver<String>>, deadline: Option<Instant>) -> Option<String> {
    let Some(rx) = rx else {
        return Some(String::new());
    };
    let received = match deadline {
        Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };
    match received {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

fn wait_until(child: &mut Child, deadline: Option<Instant>) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_success_helpers() {
        let out = CommandOutput::success("hello\n");
        assert!(out.is_success());
        assert_eq!(out.exit_code, Some(0));
        assert_eq!(out.combined(), "hello\n");
    }

    #[test]
    fn output_failure_helpers() {
        let out = CommandOutput::failure(2, "boom");
        assert!(!out.is_success());
        assert_eq!(out.combined(), "boom");
    }

    #[test]
    fn combined_joins_stdout_and_stderr() {
        let out = CommandOutput {
            exit_code: Some(0),
            stdout: "out".to_string(),
            stderr: "err".to_string(),
        };
        assert_eq!(out.combined(), "out\nerr");
    }

    #[test]
    fn missing_program_is_not_found() {
        let runner = SystemRunner::default();
        let err = runner
            .run("this-command-does-not-exist-12345", &[])
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("this-command-does-not-exist-12345"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_successful_command() {
        let runner = SystemRunner::default();
        let out = runner.run("sh", &["-c", "echo hello"]).unwrap();
        assert!(out.is_success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_separately() {
        let runner = SystemRunner::default();
        let out = runner.run("sh", &["-c", "echo oops >&2"]).unwrap();
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_output_not_error() {
        let runner = SystemRunner::default();
        let out = runner.run("sh", &["-c", "exit 3"]).unwrap();
        assert!(!out.is_success());
        assert_eq!(out.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn long_running_command_times_out() {
        let runner = SystemRunner::new(Duration::from_millis(100));
        let start = Instant::now();
        let err = runner.run("sleep", &["5"]).unwrap_err();
        assert!(matches!(err, CommandError::TimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn unrepresentable_timeout_means_no_deadline() {
        let runner = SystemRunner::new(Duration::from_secs(u64::MAX));
        let out = runner.run("sh", &["-c", "echo hi"]).unwrap();
        assert_eq!(out.stdout.trim(), "hi");
    }

    #[cfg(unix)]
    #[test]
    fn background_process_holding_pipes_times_out() {
        let runner = SystemRunner::new(Duration::from_secs(1));
        let start = Instant::now();
        let err = runner.run("sh", &["-c", "sleep 8 & echo hi"]).unwrap_err();
        assert!(matches!(err, CommandError::TimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn background_process_with_closed_pipes_is_fine() {
        let runner = SystemRunner::new(Duration::from_secs(2));
        let out = runner
            .run("sh", &["-c", "sleep 8 >/dev/null 2>&1 & echo hi"])
            .unwrap();
        assert_eq!(out.stdout.trim(), "hi");
    }
}
