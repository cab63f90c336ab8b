//! Visual theme and styling.

use console::Style;

use crate::verify::CheckLevel;

/// Colors and icons for terminal output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for OK lines (green).
    pub success: Style,
    /// Style for WARNING lines (orange).
    pub warning: Style,
    /// Style for FAIL lines and errors (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Icon for a check level.
    pub fn icon(level: CheckLevel) -> &'static str {
        match level {
            CheckLevel::Ok => "✓",
            CheckLevel::Warning => "⚠",
            CheckLevel::Fail => "✗",
        }
    }

    fn style_for(&self, level: CheckLevel) -> &Style {
        match level {
            CheckLevel::Ok => &self.success,
            CheckLevel::Warning => &self.warning,
            CheckLevel::Fail => &self.error,
        }
    }

    /// Format a check outcome: icon, padded level label, message.
    pub fn format_status(&self, level: CheckLevel, msg: &str) -> String {
        format!(
            "{} {}",
            self.style_for(level)
                .apply_to(format!("{} {:<7}", Self::icon(level), level.label())),
            msg
        )
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_has_icon_and_label() {
        let theme = Theme::plain();
        assert_eq!(
            theme.format_status(CheckLevel::Ok, "Kernel: 5.10.0"),
            "✓ OK      Kernel: 5.10.0"
        );
        assert!(theme
            .format_status(CheckLevel::Warning, "x")
            .starts_with("⚠ WARNING"));
        assert!(theme
            .format_status(CheckLevel::Fail, "x")
            .starts_with("✗ FAIL"));
    }

    #[test]
    fn theme_formats_messages() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_error("broken"), "✗ broken");
        assert_eq!(theme.format_header("envcheck"), "envcheck");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = Theme::new();
        assert!(theme
            .format_status(CheckLevel::Fail, "Runtime: missing")
            .contains("Runtime: missing"));
    }
}
