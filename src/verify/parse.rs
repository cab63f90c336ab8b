//! Parsers for external tool output.
//!
//! Each function handles one output shape and returns `None` when the
//! expected information is not there. Callers fold `None` into a WARNING.

use serde::Serialize;

/// Distribution identity reported by `lsb_release -a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistroInfo {
    /// Distributor id, e.g. `Ubuntu`.
    pub id: String,
    /// Free-form description, e.g. `Ubuntu 22.04.4 LTS`.
    pub description: Option<String>,
}

/// An installed driver package and its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverInfo {
    pub package: String,
    pub version: String,
}

/// Iterate over `key: value` lines, skipping lines without a colon or value.
pub fn key_values(output: &str) -> impl Iterator<Item = (&str, &str)> {
    output.lines().filter_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some((key.trim(), value))
        }
    })
}

/// Parse `lsb_release -a` output.
///
/// ```text
/// Distributor ID: Ubuntu
/// Description:    Ubuntu 22.04.4 LTS
/// Release:        22.04
/// Codename:       jammy
/// ```
pub fn parse_lsb_release(output: &str) -> Option<DistroInfo> {
    let mut id = None;
    let mut description = None;

    for (key, value) in key_values(output) {
        match key {
            "Distributor ID" => id = Some(value.to_string()),
            "Description" => description = Some(value.to_string()),
            _ => {}
        }
    }

    Some(DistroInfo {
        id: id?,
        description,
    })
}

/// Scan a package listing for a driver version.
///
/// A line qualifies when it contains one of `tokens`; its version is the
/// whitespace-delimited field at `version_field` (zero-based). Versions
/// reading `none` are skipped. The first qualifying line wins.
pub fn parse_package_listing(
    output: &str,
    package: &str,
    tokens: &[String],
    version_field: usize,
) -> Option<DriverInfo> {
    output
        .lines()
        .filter(|line| tokens.iter().any(|token| line.contains(token.as_str())))
        .filter_map(|line| line.split_whitespace().nth(version_field))
        .find(|version| !is_none_version(version))
        .map(|version| DriverInfo {
            package: package.to_string(),
            version: version.to_string(),
        })
}

/// `none`, or `<none>` as dpkg prints for removed packages.
fn is_none_version(version: &str) -> bool {
    version
        .trim_start_matches('<')
        .trim_end_matches('>')
        .eq_ignore_ascii_case("none")
}
