//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every status line, header, and verdict.
    #[default]
    Normal,
    /// Only WARNING/FAIL lines and the verdict.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows OK status lines.
    pub fn shows_ok_status(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows headers and advisory notes.
    pub fn shows_decoration(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
