//! Check command implementation.
//!
//! Running `envcheck` with no subcommand verifies the host and renders one
//! status line per check followed by a verdict.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::CheckArgs;
use crate::config::{load_config, CheckConfig};
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::verify::{Advisories, CheckLevel, EnvironmentVerifier, Report};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command for the given working directory.
    pub fn new(root: &Path, args: CheckArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load config and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<CheckConfig> {
        let mut config = load_config(&self.root, self.args.config.as_deref())?;
        if let Some(env_dir) = &self.args.env_dir {
            config.env_dir = env_dir.clone();
        }
        if let Some(timeout) = self.args.timeout {
            config.command_timeout_secs = timeout;
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the checks through `runner` and render the report.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
        config: &CheckConfig,
    ) -> Result<CommandResult> {
        let verifier = EnvironmentVerifier::new(config, runner, &self.root);
        let report = verifier.run();
        tracing::debug!("Environment usable: {}", report.usable);

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&report)?);
        } else {
            render_report(ui, &report, config);
        }

        if report.usable {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.resolve_config()?;
        let runner = SystemRunner::new(Duration::from_secs(config.command_timeout_secs));
        self.execute_with(ui, &runner, &config)
    }
}

fn render_report(ui: &mut dyn UserInterface, report: &Report, config: &CheckConfig) {
    ui.show_header("Host environment");
    for (check, result) in report.core.iter() {
        ui.status(result.level, &format!("{}: {}", check.label(), result.message));
    }

    ui.show_header("Virtual environment");
    render_advisories(ui, &report.advisories, config);

    let failed = report.core.iter().filter(|(_, r)| r.is_fatal()).count();
    if report.core.all_ok() {
        ui.success("Environment is usable");
    } else if report.usable {
        ui.success("Environment is usable, with warnings");
    } else {
        ui.error(&format!(
            "Environment is not usable: {} core check{} failed",
            failed,
            if failed == 1 { "" } else { "s" }
        ));
    }
}

fn render_advisories(ui: &mut dyn UserInterface, advisories: &Advisories, config: &CheckConfig) {
    let interpreter = &config.interpreter;
    let env_dir = &config.env_dir;

    if advisories.virtualenv_tool {
        ui.status(
            CheckLevel::Ok,
            &format!("Environment tool: `{} -m venv` is available", interpreter),
        );
    } else {
        ui.status(
            CheckLevel::Warning,
            &format!(
                "Environment tool: `{} -m venv` is unavailable, install the venv module",
                interpreter
            ),
        );
    }

    if advisories.prior_env {
        ui.status(
            CheckLevel::Ok,
            &format!("Prior environment: found {}/bin/activate", env_dir),
        );
    } else {
        ui.status(
            CheckLevel::Warning,
            &format!(
                "Prior environment: none, create one with `{} -m venv {}`",
                interpreter, env_dir
            ),
        );
    }

    if advisories.inside_env {
        ui.status(
            CheckLevel::Ok,
            &format!("Active environment: running inside {}", env_dir),
        );
    } else if advisories.prior_env {
        ui.status(
            CheckLevel::Warning,
            &format!(
                "Active environment: not active, run `source {}/bin/activate`",
                env_dir
            ),
        );
    } else {
        ui.status(
            CheckLevel::Warning,
            &format!("Active environment: not running inside {}", env_dir),
        );
    }
}
