//! About command implementation.
//!
//! `envcheck --about` prints program metadata and never runs a check.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Program metadata shown by `--about`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub copyright: &'static str,
    pub credits: &'static str,
    pub license: &'static str,
    pub version: &'static str,
    pub maintainer: &'static str,
    pub status: &'static str,
}

impl AboutInfo {
    /// Metadata for this build.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            author: env!("CARGO_PKG_AUTHORS"),
            copyright: "Copyright (c) envcheck maintainers",
            credits: "envcheck maintainers and contributors",
            license: env!("CARGO_PKG_LICENSE"),
            version: env!("CARGO_PKG_VERSION"),
            maintainer: env!("CARGO_PKG_AUTHORS"),
            status: "Development",
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, &'static str); 8] {
        [
            ("Name", self.name),
            ("Author", self.author),
            ("Copyright", self.copyright),
            ("Credits", self.credits),
            ("License", self.license),
            ("Version", self.version),
            ("Maintainer", self.maintainer),
            ("Status", self.status),
        ]
    }
}

/// The about command implementation.
#[derive(Debug, Default)]
pub struct AboutCommand;

impl AboutCommand {
    /// Create a new about command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for AboutCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for (label, value) in AboutInfo::current().fields() {
            ui.message(&format!("{:<11} {}", format!("{}:", label), value));
        }
        Ok(CommandResult::success())
    }
}
