//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed flags to a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher checking the given working directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dispatch and execute a command.
    ///
    /// `--about` short-circuits before any config is read or check runs.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.about {
            return super::about::AboutCommand::new().execute(ui);
        }
        let cmd = super::check::CheckCommand::new(&self.root, cli.check_args());
        cmd.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.root(), Path::new("/test"));
    }

    #[test]
    fn about_ignores_broken_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("envcheck.yml"), "interpreter: [").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli {
            about: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.statuses().is_empty());
        assert!(ui.has_message("License"));
    }

    #[test]
    fn check_reports_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli {
            config: Some(temp.path().join("missing.yml")),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert!(err.to_string().contains("missing.yml"));
    }
}
