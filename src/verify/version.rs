//! Version parsing and minimum-version comparison.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::status::CheckResult;

/// First `major.minor[.patch]` anywhere in a line of tool output.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// Leading `major.minor[.patch]` of a kernel release; suffixes are ignored.
static KERNEL_RELEASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A detected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Compare `(major, minor)` lexicographically against a requirement.
    ///
    /// The patch level never matters.
    pub fn meets(&self, required: &VersionRequirement) -> bool {
        (self.major, self.minor) >= (required.major, required.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// A minimum acceptable `(major, minor)` version.
///
/// Deserializes from either `"3.6"` or `{ major: 3, minor: 6 }`.
/// A bare YAML number is rejected because `4.10` would read as `4.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RequirementRepr", into = "String")]
pub struct VersionRequirement {
    pub major: u32,
    pub minor: u32,
}

impl VersionRequirement {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionRequirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("expected MAJOR.MINOR, got '{}'", s))?;
        let major = major
            .parse()
            .map_err(|_| format!("invalid major version in '{}'", s))?;
        let minor = minor
            .parse()
            .map_err(|_| format!("invalid minor version in '{}'", s))?;
        Ok(Self { major, minor })
    }
}

impl From<VersionRequirement> for String {
    fn from(req: VersionRequirement) -> Self {
        req.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementRepr {
    Text(String),
    Parts { major: u32, minor: u32 },
}

impl TryFrom<RequirementRepr> for VersionRequirement {
    type Error = String;

    fn try_from(repr: RequirementRepr) -> Result<Self, Self::Error> {
        match repr {
            RequirementRepr::Text(text) => text.parse(),
            RequirementRepr::Parts { major, minor } => Ok(Self { major, minor }),
        }
    }
}

/// Extract the first version number from tool output such as `Python 3.10.12`.
pub fn parse_version(output: &str) -> Option<Version> {
    captures_to_version(VERSION_PATTERN.captures(output)?)
}

/// Parse the leading numeric fields of a kernel release such as `5.10.0-21-amd64`.
pub fn parse_kernel_release(release: &str) -> Option<Version> {
    captures_to_version(KERNEL_RELEASE_PATTERN.captures(release)?)
}

fn captures_to_version(caps: regex::Captures<'_>) -> Option<Version> {
    Some(Version {
        major: caps.get(1)?.as_str().parse().ok()?,
        minor: caps.get(2)?.as_str().parse().ok()?,
        patch: caps.get(3).and_then(|m| m.as_str().parse().ok()),
    })
}

/// Compare a detected interpreter version against the minimum.
pub fn check_runtime_version(detected: Version, required: VersionRequirement) -> CheckResult {
    if detected.meets(&required) {
        CheckResult::ok(format!("version {} (>= {} required)", detected, required))
    } else {
        CheckResult::fail(format!(
            "version {} is older than the required {}",
            detected, required
        ))
    }
}

/// Compare a kernel release string against the minimum.
///
/// A release whose leading fields are not numeric yields a WARNING.
pub fn check_kernel_version(release: &str, required: VersionRequirement) -> CheckResult {
    let release = release.trim();
    match parse_kernel_release(release) {
        Some(detected) if detected.meets(&required) => {
            CheckResult::ok(format!("{} (>= {} required)", release, required))
        }
        Some(_) => CheckResult::fail(format!(
            "{} is older than the required {}",
            release, required
        )),
        None => CheckResult::warning(format!(
            "unable to parse kernel release '{}', version unknown",
            release
        )),
    }
}
