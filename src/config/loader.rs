//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::schema::CheckConfig;
use crate::error::{EnvCheckError, Result};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "envcheck.yml";

/// Find `envcheck.yml` in `root`, if present.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config at {}", path.display()))
                .map_err(EnvCheckError::from)
        }
    };

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckConfig> {
    if content.trim().is_empty() {
        return Ok(CheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override, then validate it.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `envcheck.yml` in `root` is used when present, and the defaults when not.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<CheckConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_config(root) {
            Some(path) => {
                tracing::debug!("Using config at {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                CheckConfig::default()
            }
        },
    };

    config.validate()?;
    Ok(config)
}
