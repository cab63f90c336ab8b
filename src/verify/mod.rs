//! Host environment verification.
//!
//! This module runs the checks that decide whether the host can run the
//! target workload:
//!
//! - [`status`] - Check levels, results, and the core status vector
//! - [`version`] - Version parsing and minimum-version comparison
//! - [`parse`] - Parsers for distribution and package-manager output
//! - [`probe`] - PATH resolution for the interpreter
//! - [`verifier`] - The [`EnvironmentVerifier`] that runs every check

pub mod parse;
pub mod probe;
pub mod status;
pub mod verifier;
pub mod version;

pub use parse::{DistroInfo, DriverInfo};
pub use status::{Advisories, CheckLevel, CheckResult, CoreCheck, Report, StatusVector};
pub use verifier::{DriverScan, EnvironmentVerifier, PackageManager};
pub use version::{check_kernel_version, check_runtime_version, Version, VersionRequirement};
