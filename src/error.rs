//! Error types for envcheck operations.
//!
//! This module defines [`EnvCheckError`], the error type for failures that
//! stop the program itself, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check outcomes are never errors: a missing tool or an old kernel is a
//!   [`CheckResult`](crate::verify::CheckResult), not an `EnvCheckError`
//! - Use `EnvCheckError` for problems with the run itself (bad config, I/O)
//! - Use `anyhow::Error` (via `EnvCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Failed to serialize the report.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = EnvCheckError::ConfigNotFound {
            path: PathBuf::from("/etc/envcheck.yml"),
        };
        assert!(err.to_string().contains("/etc/envcheck.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = EnvCheckError::ConfigParseError {
            path: PathBuf::from("/envcheck.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/envcheck.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = EnvCheckError::ConfigValidationError {
            message: "env_dir must not be empty".into(),
        };
        assert!(err.to_string().contains("env_dir must not be empty"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvCheckError = io_err.into();
        assert!(matches!(err, EnvCheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: EnvCheckError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
