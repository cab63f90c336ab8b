//! Configuration loading and validation.
//!
//! Thresholds, candidate lists and the virtual environment directory are
//! read from an optional `envcheck.yml`. Command-line flags override
//! individual values after loading.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::CheckConfig;
