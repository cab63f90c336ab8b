//! Configuration schema.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the standard thresholds and candidate lists.

use serde::{Deserialize, Serialize};

use crate::error::{EnvCheckError, Result};
use crate::verify::VersionRequirement;

/// Longest per-command timeout accepted, in seconds.
pub const MAX_COMMAND_TIMEOUT_SECS: u64 = 3600;

/// Settings for one verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Interpreter to probe, looked up on PATH.
    pub interpreter: String,

    /// Minimum interpreter version.
    pub runtime_min: VersionRequirement,

    /// Minimum kernel version.
    pub kernel_min: VersionRequirement,

    /// Distribution-info tool, invoked with `-a`.
    pub distro_tool: String,

    /// Distributor ids known to work.
    pub accepted_distros: Vec<String>,

    /// Driver packages to query, in order.
    pub driver_packages: Vec<String>,

    /// Substrings that mark a package listing line as a driver line.
    pub driver_tokens: Vec<String>,

    /// Directory name of the virtual environment, relative to the working directory.
    pub env_dir: String,

    /// Seconds an external command may run before it is killed.
    pub command_timeout_secs: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            runtime_min: VersionRequirement::new(3, 6),
            kernel_min: VersionRequirement::new(4, 8),
            distro_tool: "lsb_release".to_string(),
            accepted_distros: strings(&["Debian", "Ubuntu", "Gentoo", "Arch"]),
            driver_packages: strings(&["amdgpu", "amdgpu-core", "amdgpu-pro", "rocm-utils"]),
            driver_tokens: strings(&["amdgpu", "rocm"]),
            env_dir: "venv".to_string(),
            command_timeout_secs: 5,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl CheckConfig {
    /// Reject values that would make a check meaningless.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.interpreter.trim().is_empty() {
            Some("interpreter must not be empty")
        } else if self.distro_tool.trim().is_empty() {
            Some("distro_tool must not be empty")
        } else if self.env_dir.trim().is_empty() {
            Some("env_dir must not be empty")
        } else if self.command_timeout_secs == 0 {
            Some("command_timeout_secs must be at least 1")
        } else if self.command_timeout_secs > MAX_COMMAND_TIMEOUT_SECS {
            Some("command_timeout_secs must be at most 3600")
        } else if self.accepted_distros.is_empty() {
            Some("accepted_distros must list at least one distribution")
        } else if self.driver_packages.is_empty() {
            Some("driver_packages must list at least one package")
        } else if self.driver_tokens.iter().all(|t| t.trim().is_empty()) {
            Some("driver_tokens must list at least one non-empty token")
        } else {
            None
        };

        match problem {
            Some(message) => Err(EnvCheckError::ConfigValidationError {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Whether `id` is one of the accepted distributions (ASCII case-insensitive).
    pub fn accepts_distro(&self, id: &str) -> bool {
        self.accepted_distros
            .iter()
            .any(|d| d.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let config = CheckConfig::default();
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.runtime_min, VersionRequirement::new(3, 6));
        assert_eq!(config.kernel_min, VersionRequirement::new(4, 8));
        assert_eq!(
            config.driver_packages,
            vec!["amdgpu", "amdgpu-core", "amdgpu-pro", "rocm-utils"]
        );
        assert_eq!(config.env_dir, "venv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_yaml_is_default() {
        let config: CheckConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "interpreter: python3.11\nkernel_min: \"5.4\"\n";
        let config: CheckConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.interpreter, "python3.11");
        assert_eq!(config.kernel_min, VersionRequirement::new(5, 4));
        assert_eq!(config.runtime_min, VersionRequirement::new(3, 6));
    }

    #[test]
    fn accepts_distro_ignores_case() {
        let config = CheckConfig::default();
        assert!(config.accepts_distro("Ubuntu"));
        assert!(config.accepts_distro("arch"));
        assert!(!config.accepts_distro("Fedora"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = CheckConfig {
            command_timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("command_timeout_secs"));
    }

    #[test]
    fn validate_bounds_timeout_from_above() {
        let at_limit = CheckConfig {
            command_timeout_secs: MAX_COMMAND_TIMEOUT_SECS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let huge = CheckConfig {
            command_timeout_secs: u64::MAX,
            ..Default::default()
        };
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("at most 3600"));
    }

    #[test]
    fn validate_rejects_empty_env_dir() {
        let config = CheckConfig {
            env_dir: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_candidate_lists() {
        let config = CheckConfig {
            driver_packages: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CheckConfig {
            driver_tokens: vec![String::new()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
