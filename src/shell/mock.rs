//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] from a table of canned
//! responses keyed by the full command line, and records every call.
//!
//! # Example
//!
//! ```
//! use envcheck::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_output("uname -r", "5.10.0-generic\n");
//!
//! let out = runner.run("uname", &["-r"]).unwrap();
//! assert_eq!(out.stdout.trim(), "5.10.0-generic");
//! assert!(runner.run("lsb_release", &["-a"]).unwrap_err().is_not_found());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use super::command::{CommandError, CommandOutput, CommandRunner};

#[derive(Debug, Clone)]
enum MockResponse {
    Output(CommandOutput),
    TimedOut,
}

/// Command runner that answers from canned responses.
///
/// Lookup rules:
/// - an exact command-line match returns its response
/// - a known program with unregistered arguments exits with code 1
/// - an unknown program is [`CommandError::NotFound`]
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    programs: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every program is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command_line` with a successful exit and `stdout`.
    pub fn with_output(self, command_line: &str, stdout: &str) -> Self {
        self.with_response(command_line, CommandOutput::success(stdout))
    }

    /// Respond to `command_line` with a successful exit that writes to stderr.
    pub fn with_stderr(self, command_line: &str, stderr: &str) -> Self {
        let output = CommandOutput {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: stderr.to_string(),
        };
        self.with_response(command_line, output)
    }

    /// Respond to `command_line` with a non-zero exit.
    pub fn with_failure(self, command_line: &str, exit_code: i32, stderr: &str) -> Self {
        self.with_response(command_line, CommandOutput::failure(exit_code, stderr))
    }

    /// Respond to `command_line` with an arbitrary output.
    pub fn with_response(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.register(command_line, MockResponse::Output(output));
        self
    }

    /// Make `command_line` time out.
    pub fn with_timeout(mut self, command_line: &str) -> Self {
        self.register(command_line, MockResponse::TimedOut);
        self
    }

    /// Mark `program` as installed without registering any response.
    pub fn with_program(mut self, program: &str) -> Self {
        if !self.programs.iter().any(|p| p == program) {
            self.programs.push(program.to_string());
        }
        self
    }

    /// All command lines that were run, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command line starting with `prefix` was run.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn register(&mut self, command_line: &str, response: MockResponse) {
        let key = normalize(command_line);
        if let Some(program) = key.split_whitespace().next() {
            let program = program.to_string();
            if !self.programs.contains(&program) {
                self.programs.push(program);
            }
        }
        self.responses.insert(key, response);
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let key = normalize(&format!("{} {}", program, args.join(" ")));
        self.calls.borrow_mut().push(key.clone());

        match self.responses.get(&key) {
            Some(MockResponse::Output(output)) => Ok(output.clone()),
            Some(MockResponse::TimedOut) => Err(CommandError::TimedOut {
                program: program.to_string(),
                timeout: Duration::from_secs(5),
            }),
            None if self.programs.iter().any(|p| p == program) => {
                Ok(CommandOutput::failure(1, "no matching entry"))
            }
            None => Err(CommandError::NotFound {
                program: program.to_string(),
            }),
        }
    }
}

fn normalize(command_line: &str) -> String {
    command_line.split_whitespace().collect::<Vec<_>>().join(" ")
}
