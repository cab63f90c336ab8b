//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Environment is usable");
//! ui.error("config file not found");
//!
//! assert!(ui.has_message("usable"));
//! assert!(ui.has_error("not found"));
//! ```

use crate::verify::CheckLevel;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call, including status lines a terminal would hide in
/// quiet mode. Use [`MockUI::visible_statuses`] to see what would print.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    statuses: Vec<(CheckLevel, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured status lines in order.
    pub fn statuses(&self) -> &[(CheckLevel, String)] {
        &self.statuses
    }

    /// Status lines the current output mode would print.
    pub fn visible_statuses(&self) -> Vec<&(CheckLevel, String)> {
        self.statuses
            .iter()
            .filter(|(level, _)| *level != CheckLevel::Ok || self.mode.shows_ok_status())
            .collect()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line with this level and text was shown.
    pub fn has_status(&self, level: CheckLevel, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(l, m)| *l == level && m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn status(&mut self, level: CheckLevel, msg: &str) {
        self.statuses.push((level, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.message("World");
        assert_eq!(ui.messages(), &["Hello", "World"]);
        assert!(ui.has_message("Hello"));
        assert!(!ui.has_message("Goodbye"));
    }

    #[test]
    fn mock_ui_captures_each_channel() {
        let mut ui = MockUI::new();
        ui.success("done");
        ui.error("broken");
        ui.show_header("envcheck");

        assert!(ui.has_success("done"));
        assert!(ui.has_error("broken"));
        assert_eq!(ui.headers(), &["envcheck"]);
        assert_eq!(ui.successes().len(), 1);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn mock_ui_captures_statuses_in_order() {
        let mut ui = MockUI::new();
        ui.status(CheckLevel::Ok, "Runtime: 3.11");
        ui.status(CheckLevel::Fail, "Kernel: 4.4");

        assert_eq!(ui.statuses().len(), 2);
        assert_eq!(ui.statuses()[1].0, CheckLevel::Fail);
        assert!(ui.has_status(CheckLevel::Ok, "Runtime"));
        assert!(!ui.has_status(CheckLevel::Warning, "Runtime"));
    }

    #[test]
    fn quiet_mock_hides_ok_from_visible_statuses() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.status(CheckLevel::Ok, "Runtime: 3.11");
        ui.status(CheckLevel::Warning, "Distribution: unknown");

        assert_eq!(ui.statuses().len(), 2);
        assert_eq!(ui.visible_statuses().len(), 1);
    }
}
