//! Runs the built binary to check its output and exit status

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the CLI with an empty config home so a user config never leaks in
fn semver_engine(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semver-engine"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn absent_result_prints_null_in_json_mode_and_fails() {
    let home = TempDir::new().unwrap();
    let output = semver_engine(home.path(), &["--json", "min-version", "^2.0.0 <1.0.0"]);

    assert_eq!(stdout(&output), "null\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn absent_result_prints_nothing_in_text_mode_and_fails() {
    let home = TempDir::new().unwrap();
    let output = semver_engine(home.path(), &["min-version", "^2.0.0 <1.0.0"]);

    assert_eq!(stdout(&output), "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn false_result_still_succeeds() {
    let home = TempDir::new().unwrap();
    let output = semver_engine(home.path(), &["satisfies", "2.0.0", "^1"]);

    assert_eq!(stdout(&output), "false\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn range_prints_normalized_comparators() {
    let home = TempDir::new().unwrap();
    let output = semver_engine(home.path(), &["range", "1.2 - 2.3"]);

    assert_eq!(stdout(&output), ">=1.2.0 <2.4.0\n");
    assert!(output.status.success());
}

#[test]
fn config_output_json_switches_format() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(&config, r#"{ "output": { "json": true } }"#).unwrap();

    let output = semver_engine(
        home.path(),
        &["--config", config.to_str().unwrap(), "coerce", "node v18.2"],
    );

    assert_eq!(stdout(&output), "\"18.2.0\"\n");
    assert!(output.status.success());
}
