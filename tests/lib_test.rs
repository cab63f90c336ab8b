//! Library integration tests.

use envcheck::config::CheckConfig;
use envcheck::shell::MockRunner;
use envcheck::verify::{CheckLevel, CoreCheck, EnvironmentVerifier};
use envcheck::EnvCheckError;

#[test]
fn error_types_are_public() {
    let err = EnvCheckError::ConfigValidationError {
        message: "env_dir must not be empty".into(),
    };
    assert!(err.to_string().contains("env_dir"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envcheck::cli::Cli;

    let cli = Cli::parse_from(["envcheck", "--json", "--env-dir", ".venv"]);
    assert!(cli.json);
    assert_eq!(cli.env_dir.as_deref(), Some(".venv"));
}

#[test]
fn verifier_with_custom_thresholds() {
    let config: CheckConfig = serde_yaml::from_str(
        "interpreter: python3.12\nruntime_min: \"3.12\"\nkernel_min: { major: 6, minor: 1 }\n",
    )
    .unwrap();
    let runner = MockRunner::new()
        .with_output("python3.12 --version", "Python 3.12.1")
        .with_output("uname -r", "6.0.9");
    let temp = tempfile::TempDir::new().unwrap();
    let verifier = EnvironmentVerifier::new(&config, &runner, temp.path());

    let status = verifier.check_env();
    assert_eq!(status[CoreCheck::Runtime].level, CheckLevel::Ok);
    assert_eq!(status[CoreCheck::Kernel].level, CheckLevel::Fail);
    assert!(!status.is_usable());
}

#[test]
fn report_is_usable_with_only_warnings() {
    let config = CheckConfig::default();
    let runner = MockRunner::new()
        .with_output("python3 --version", "Python 3.6.0")
        .with_output("uname -r", "4.8.0");
    let temp = tempfile::TempDir::new().unwrap();
    let report = EnvironmentVerifier::new(&config, &runner, temp.path()).run();

    assert!(report.usable);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.core[CoreCheck::Distro].level, CheckLevel::Warning);
    assert_eq!(report.core[CoreCheck::Driver].level, CheckLevel::Warning);
}
