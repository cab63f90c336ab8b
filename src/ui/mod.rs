//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Theme`] for colors and status icons
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{MockUI, UserInterface};
//! use envcheck::verify::CheckLevel;
//!
//! let mut ui = MockUI::new();
//! ui.status(CheckLevel::Warning, "Distribution: unverified distro: Fedora");
//! assert!(ui.has_status(CheckLevel::Warning, "Fedora"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

use crate::verify::CheckLevel;

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a program error. Goes to stderr on a real terminal.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Display one check outcome.
    fn status(&mut self, level: CheckLevel, msg: &str);
}
