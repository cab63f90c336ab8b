//! Check outcome types.
//!
//! Every check produces a [`CheckResult`]. The four core checks are
//! collected into a [`StatusVector`], whose fixed length and order are
//! enforced by its array representation.

use std::ops::Index;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Classification of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// The prerequisite is met.
    Ok,
    /// Unknown or untested, but not known to be broken.
    Warning,
    /// The prerequisite is not met.
    Fail,
}

impl CheckLevel {
    /// Whether this level stops the environment from being usable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckLevel::Fail)
    }

    /// Upper-case label used in plain output.
    pub fn label(&self) -> &'static str {
        match self {
            CheckLevel::Ok => "OK",
            CheckLevel::Warning => "WARNING",
            CheckLevel::Fail => "FAIL",
        }
    }
}

/// Outcome of one check: a level plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub level: CheckLevel,
    pub message: String,
}

impl CheckResult {
    /// Create an OK result.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Ok,
            message: message.into(),
        }
    }

    /// Create a WARNING result.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Warning,
            message: message.into(),
        }
    }

    /// Create a FAIL result.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Fail,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.level == CheckLevel::Ok
    }

    pub fn is_fatal(&self) -> bool {
        self.level.is_fatal()
    }
}

/// The core checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreCheck {
    Runtime,
    Kernel,
    Distro,
    Driver,
}

impl CoreCheck {
    /// All core checks in run order.
    pub const ALL: [CoreCheck; 4] = [
        CoreCheck::Runtime,
        CoreCheck::Kernel,
        CoreCheck::Distro,
        CoreCheck::Driver,
    ];

    /// Position of this check in a [`StatusVector`].
    pub fn index(&self) -> usize {
        match self {
            CoreCheck::Runtime => 0,
            CoreCheck::Kernel => 1,
            CoreCheck::Distro => 2,
            CoreCheck::Driver => 3,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CoreCheck::Runtime => "Runtime",
            CoreCheck::Kernel => "Kernel",
            CoreCheck::Distro => "Distribution",
            CoreCheck::Driver => "GPU driver",
        }
    }
}

/// Results of the four core checks in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusVector([CheckResult; 4]);

impl StatusVector {
    /// Build a vector from the four core results.
    pub fn new(
        runtime: CheckResult,
        kernel: CheckResult,
        distro: CheckResult,
        driver: CheckResult,
    ) -> Self {
        Self([runtime, kernel, distro, driver])
    }

    /// Result of a specific core check.
    pub fn get(&self, check: CoreCheck) -> &CheckResult {
        &self.0[check.index()]
    }

    /// Iterate over `(check, result)` pairs in run order.
    pub fn iter(&self) -> impl Iterator<Item = (CoreCheck, &CheckResult)> {
        CoreCheck::ALL.into_iter().zip(self.0.iter())
    }

    /// Levels in run order.
    pub fn levels(&self) -> [CheckLevel; 4] {
        [
            self.0[0].level,
            self.0[1].level,
            self.0[2].level,
            self.0[3].level,
        ]
    }

    /// True when no core check failed.
    pub fn is_usable(&self) -> bool {
        !self.0.iter().any(CheckResult::is_fatal)
    }

    /// True when every core check is OK.
    pub fn all_ok(&self) -> bool {
        self.0.iter().all(CheckResult::is_ok)
    }
}

impl Index<usize> for StatusVector {
    type Output = CheckResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Index<CoreCheck> for StatusVector {
    type Output = CheckResult;

    fn index(&self, check: CoreCheck) -> &Self::Output {
        self.get(check)
    }
}

#[derive(Serialize)]
struct Entry<'a> {
    check: CoreCheck,
    level: CheckLevel,
    message: &'a str,
}

impl Serialize for StatusVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (check, result) in self.iter() {
            seq.serialize_element(&Entry {
                check,
                level: result.level,
                message: &result.message,
            })?;
        }
        seq.end()
    }
}

/// Results of the advisory virtual-environment checks.
///
/// These never affect the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisories {
    /// The interpreter's environment tooling responds to `--help`.
    pub virtualenv_tool: bool,
    /// An environment was already created in the working directory.
    pub prior_env: bool,
    /// The interpreter on PATH lives inside that environment.
    pub inside_env: bool,
}

/// Everything one run of the verifier found.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub core: StatusVector,
    pub advisories: Advisories,
    pub usable: bool,
}

impl Report {
    /// Build a report; usability is derived from the core results alone.
    pub fn new(core: StatusVector, advisories: Advisories) -> Self {
        let usable = core.is_usable();
        Self {
            core,
            advisories,
            usable,
        }
    }

    /// Process exit code: 0 when usable, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.usable {
            0
        } else {
            1
        }
    }
}
