//! End-to-end tests running the built `retail-calc` binary.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with an isolated config dir and no RETAIL_CALC_* overrides.
fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let config_home = TempDir::new().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_retail-calc"));
    cmd.args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RETAIL_CALC_COLOR")
        .env_remove("RETAIL_CALC_LOG_LEVEL");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("run retail-calc")
}

#[test]
fn given_unknown_state_when_running_then_warning_on_stderr_and_untaxed_line_on_stdout() {
    let output = run(&["-q", "1", "-p", "100", "-s", "zz"], &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "(zz) n'existe pas, aucun taxe appliqué.\n"
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Prix total: 100.00 € pour 1 articles à 100.00 € l'unité dans l'état ZZ avec une remise de 0.00 € et une taxe de 0%\n"
    );
}

#[test]
fn given_known_state_when_running_then_stderr_is_empty() {
    let output = run(&["-q", "2", "-p", "3000", "-s", "NV"], &[]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Prix total: 6156.00 €"));
}

#[test]
fn given_invalid_color_env_when_running_then_warns_and_still_prices() {
    let output = run(
        &["-q", "1", "-p", "100", "-s", "ut"],
        &[("RETAIL_CALC_COLOR", "bogus")],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid color mode: bogus"));
    assert!(stderr.contains("using default settings"));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Prix total: 106.85 €"));
}

#[test]
fn given_missing_state_when_running_then_non_zero_exit_and_no_output() {
    let output = run(&["-q", "1", "-p", "100"], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
