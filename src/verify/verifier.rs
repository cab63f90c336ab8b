//! The environment verifier.
//!
//! `EnvironmentVerifier` runs the four core checks and the three advisory
//! checks against a [`CommandRunner`]. A missing tool never aborts the
//! run: each check classifies its own outcome and the core results are
//! judged together at the end.

use std::path::{Path, PathBuf};

use crate::config::CheckConfig;
use crate::shell::CommandRunner;

use super::parse::{parse_lsb_release, parse_package_listing, DriverInfo};
use super::probe::{parse_system_path, resolve_tool_path};
use super::status::{Advisories, CheckResult, Report, StatusVector};
use super::version::{check_kernel_version, check_runtime_version, parse_version};

/// Output marking a missing interpreter module.
const MODULE_NOT_FOUND: &str = "No module named";

/// Package managers the driver check knows how to query, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// Debian family: `dpkg -l <pkg>`.
    Dpkg,
    /// Arch family: `pacman -Q <pkg>`.
    Pacman,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [PackageManager::Dpkg, PackageManager::Pacman];

    /// Binary name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Dpkg => "dpkg",
            PackageManager::Pacman => "pacman",
        }
    }

    fn query_flag(&self) -> &'static str {
        match self {
            PackageManager::Dpkg => "-l",
            PackageManager::Pacman => "-Q",
        }
    }

    /// Zero-based whitespace field holding the version in a listing line.
    pub fn version_field(&self) -> usize {
        match self {
            PackageManager::Dpkg => 2,
            PackageManager::Pacman => 1,
        }
    }
}

/// Outcome of scanning the candidate packages with one package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverScan {
    Found(DriverInfo),
    NoMatch,
    ToolMissing,
}

/// Runs environment checks against the host.
pub struct EnvironmentVerifier<'a> {
    config: &'a CheckConfig,
    runner: &'a dyn CommandRunner,
    root: PathBuf,
    search_path: Vec<PathBuf>,
}

impl<'a> EnvironmentVerifier<'a> {
    /// Create a verifier rooted at `root`, resolving tools on the process PATH.
    pub fn new(config: &'a CheckConfig, runner: &'a dyn CommandRunner, root: &Path) -> Self {
        Self {
            config,
            runner,
            root: root.to_path_buf(),
            search_path: parse_system_path(),
        }
    }

    /// Replace the directories used to resolve the interpreter.
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Get the configuration this verifier checks against.
    pub fn config(&self) -> &CheckConfig {
        self.config
    }

    /// Run every check and assemble a report.
    pub fn run(&self) -> Report {
        Report::new(self.check_env(), self.check_advisories())
    }

    /// Run the four core checks in fixed order.
    ///
    /// Every check runs regardless of earlier outcomes.
    pub fn check_env(&self) -> StatusVector {
        let runtime = self.check_runtime();
        let kernel = self.check_kernel();
        let distro = self.check_distro();
        let driver = self.check_gpu_driver();
        StatusVector::new(runtime, kernel, distro, driver)
    }

    /// Detect the interpreter version and compare it with the minimum.
    ///
    /// A missing interpreter or unreadable version is a FAIL.
    pub fn check_runtime(&self) -> CheckResult {
        let interpreter = self.config.interpreter.as_str();
        let result = match self.runner.run(interpreter, &["--version"]) {
            Ok(output) if output.is_success() => match parse_version(&output.combined()) {
                Some(version) => check_runtime_version(version, self.config.runtime_min),
                None => CheckResult::fail(format!(
                    "unable to determine {} version from '{}'",
                    interpreter,
                    output.combined().trim()
                )),
            },
            Ok(output) => CheckResult::fail(format!(
                "`{} --version` exited with code {}",
                interpreter,
                exit_code_label(output.exit_code)
            )),
            Err(err) if err.is_not_found() => {
                CheckResult::fail(format!("{} not found on PATH", interpreter))
            }
            Err(err) => CheckResult::fail(err.to_string()),
        };
        tracing::debug!("Runtime check: {:?}", result);
        result
    }

    /// Read the kernel release and compare it with the minimum.
    pub fn check_kernel(&self) -> CheckResult {
        let result = match self.runner.run("uname", &["-r"]) {
            Ok(output) if output.is_success() => {
                check_kernel_version(&output.stdout, self.config.kernel_min)
            }
            Ok(output) => CheckResult::warning(format!(
                "kernel version unknown, `uname -r` exited with code {}",
                exit_code_label(output.exit_code)
            )),
            Err(err) if err.is_not_found() => {
                CheckResult::warning("kernel version unknown, uname not found")
            }
            Err(err) => CheckResult::warning(format!("kernel version unknown, {}", err)),
        };
        tracing::debug!("Kernel check: {:?}", result);
        result
    }

    /// Identify the distribution. Never FAIL.
    pub fn check_distro(&self) -> CheckResult {
        let tool = self.config.distro_tool.as_str();
        let result = match self.runner.run(tool, &["-a"]) {
            Ok(output) if output.is_success() => match parse_lsb_release(&output.stdout) {
                Some(info) => {
                    let description = info.description.as_deref().unwrap_or(&info.id);
                    if self.config.accepts_distro(&info.id) {
                        CheckResult::ok(description.to_string())
                    } else {
                        CheckResult::warning(format!("unverified distro: {}", description))
                    }
                }
                None => CheckResult::warning(format!(
                    "distro unknown, no distributor id in {} output",
                    tool
                )),
            },
            Ok(output) => CheckResult::warning(format!(
                "distro unknown, {} exited with code {}",
                tool,
                exit_code_label(output.exit_code)
            )),
            Err(err) if err.is_not_found() => {
                CheckResult::warning(format!("distro unknown, {} not found", tool))
            }
            Err(err) => CheckResult::warning(format!("distro unknown, {}", err)),
        };
        tracing::debug!("Distro check: {:?}", result);
        result
    }

    /// Look for an installed GPU driver package. Never FAIL.
    ///
    /// Package managers are tried in order; the first one present on the
    /// host is used for the whole scan. A host with both `dpkg` and `pacman`
    /// is only queried through `dpkg`.
    pub fn check_gpu_driver(&self) -> CheckResult {
        for manager in PackageManager::ALL {
            match self.scan_driver_packages(manager) {
                DriverScan::Found(info) => {
                    let result = CheckResult::ok(format!("{} {}", info.package, info.version));
                    tracing::debug!("Driver check: {:?}", result);
                    return result;
                }
                DriverScan::NoMatch => {
                    tracing::debug!("No driver package found via {}", manager.program());
                    return CheckResult::warning(format!(
                        "UNKNOWN, none of {} is installed with a usable version",
                        self.config.driver_packages.join(", ")
                    ));
                }
                DriverScan::ToolMissing => {
                    tracing::debug!("{} not available", manager.program());
                }
            }
        }
        CheckResult::warning("UNKNOWN, no package query tool found")
    }

    /// Query each candidate package with `manager`; first usable version wins.
    pub fn scan_driver_packages(&self, manager: PackageManager) -> DriverScan {
        for package in &self.config.driver_packages {
            match self
                .runner
                .run(manager.program(), &[manager.query_flag(), package.as_str()])
            {
                Ok(output) if output.is_success() => {
                    if let Some(info) = parse_package_listing(
                        &output.stdout,
                        package,
                        &self.config.driver_tokens,
                        manager.version_field(),
                    ) {
                        return DriverScan::Found(info);
                    }
                }
                Ok(output) => {
                    tracing::debug!(
                        "{} has no entry for {} (exit {})",
                        manager.program(),
                        package,
                        exit_code_label(output.exit_code)
                    );
                }
                Err(err) if err.is_not_found() => return DriverScan::ToolMissing,
                Err(err) => tracing::debug!("Querying {} failed: {}", package, err),
            }
        }
        DriverScan::NoMatch
    }

    /// Run the three advisory checks against the configured env dir.
    pub fn check_advisories(&self) -> Advisories {
        let env_dir = self.config.env_dir.as_str();
        let advisories = Advisories {
            virtualenv_tool: self.check_virtualenv_tool_present(),
            prior_env: self.check_prior_env_exists(env_dir),
            inside_env: self.check_running_inside_env(env_dir),
        };
        tracing::debug!("Advisories: {:?}", advisories);
        advisories
    }

    /// Whether `<interpreter> -m venv --help` exits cleanly and finds the module.
    pub fn check_virtualenv_tool_present(&self) -> bool {
        match self
            .runner
            .run(&self.config.interpreter, &["-m", "venv", "--help"])
        {
            Ok(output) => output.is_success() && !output.combined().contains(MODULE_NOT_FOUND),
            Err(err) => {
                tracing::debug!("Virtual environment probe failed: {}", err);
                false
            }
        }
    }

    /// Whether `<root>/<env_dir>/bin/activate` exists.
    pub fn check_prior_env_exists(&self, env_dir: &str) -> bool {
        self.activation_script(env_dir).is_file()
    }

    /// Whether the interpreter on PATH lives under a path containing `env_dir`.
    pub fn check_running_inside_env(&self, env_dir: &str) -> bool {
        match resolve_tool_path(&self.config.interpreter, &self.search_path) {
            Some(path) => {
                tracing::debug!("Interpreter resolves to {}", path.display());
                path.to_string_lossy().contains(env_dir)
            }
            None => false,
        }
    }

    /// Path of the activation script for `env_dir`.
    pub fn activation_script(&self, env_dir: &str) -> PathBuf {
        self.root.join(env_dir).join("bin").join("activate")
    }
}

fn exit_code_label(code: Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string())
}
