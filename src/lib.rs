//! envcheck - Host environment verification.
//!
//! envcheck inspects a Linux host before a GPU compute toolset is installed:
//! interpreter version, kernel version, distribution identity, GPU driver
//! package, and virtual-environment setup. Each check reports OK, WARNING,
//! or FAIL; only a FAIL in one of the four core checks makes the host
//! unusable.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//! - [`verify`] - The checks themselves
//!
//! # Example
//!
//! ```
//! use envcheck::config::CheckConfig;
//! use envcheck::shell::MockRunner;
//! use envcheck::verify::{CheckLevel, EnvironmentVerifier};
//!
//! let runner = MockRunner::new()
//!     .with_output("python3 --version", "Python 3.6.0")
//!     .with_output("uname -r", "4.8.0");
//! let config = CheckConfig::default();
//! let verifier = EnvironmentVerifier::new(&config, &runner, std::path::Path::new("."));
//!
//! let status = verifier.check_env();
//! assert_eq!(
//!     status.levels(),
//!     [CheckLevel::Ok, CheckLevel::Ok, CheckLevel::Warning, CheckLevel::Warning]
//! );
//! assert!(status.is_usable());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod verify;

pub use error::{EnvCheckError, Result};
