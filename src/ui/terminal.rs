//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::verify::CheckLevel;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI implementation.
///
/// Status lines and messages go to stdout; program errors go to stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decoration() {
            writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn status(&mut self, level: CheckLevel, msg: &str) {
        if level == CheckLevel::Ok && !self.mode.shows_ok_status() {
            return;
        }
        writeln!(self.term, "{}", self.theme.format_status(level, msg)).ok();
    }
}
