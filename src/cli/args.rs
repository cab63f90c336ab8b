//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// envcheck - Verify a host before installing a GPU compute toolset.
#[derive(Debug, Default, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print program metadata and exit without running any check
    #[arg(long)]
    pub about: bool,

    /// Path to config file (defaults to ./envcheck.yml when present)
    #[arg(short, long, env = "ENVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Virtual environment directory name (overrides config)
    #[arg(long, value_name = "NAME")]
    pub env_dir: Option<String>,

    /// Seconds each external command may run (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print warnings, failures, and the verdict
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Arguments for the check command.
    pub fn check_args(&self) -> CheckArgs {
        CheckArgs {
            config: self.config.clone(),
            env_dir: self.env_dir.clone(),
            timeout: self.timeout,
            json: self.json,
        }
    }
}

/// Arguments for the default check run.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Explicit config file
    pub config: Option<PathBuf>,

    /// Virtual environment directory override
    pub env_dir: Option<String>,

    /// Per-command timeout override in seconds
    pub timeout: Option<u64>,

    /// Emit JSON instead of status lines
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::try_parse_from(["envcheck"]).unwrap();
        assert!(!cli.about);
        assert!(!cli.json);
        assert!(cli.env_dir.is_none());
    }

    #[test]
    fn parse_about() {
        let cli = Cli::try_parse_from(["envcheck", "--about"]).unwrap();
        assert!(cli.about);
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::try_parse_from([
            "envcheck",
            "--config",
            "/tmp/envcheck.yml",
            "--env-dir",
            ".venv",
            "--timeout",
            "10",
            "--json",
            "--quiet",
        ])
        .unwrap();

        let args = cli.check_args();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/envcheck.yml")));
        assert_eq!(args.env_dir.as_deref(), Some(".venv"));
        assert_eq!(args.timeout, Some(10));
        assert!(args.json);
        assert!(cli.quiet);
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["envcheck", "--no-color", "--debug"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn timeout_must_be_a_number() {
        assert!(Cli::try_parse_from(["envcheck", "--timeout", "soon"]).is_err());
    }
}
