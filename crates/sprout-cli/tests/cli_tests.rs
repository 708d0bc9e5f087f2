//! Command-line behaviour that needs no external tools.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `sprout` isolated from the user's config and log settings.
fn sprout(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn project_with(settings: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".cookiecutter.json"), settings).unwrap();
    dir
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("notices"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();
    sprout(home.path()).assert().code(2);
}

#[test]
fn notices_prints_follow_up_steps() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .arg("notices")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cli.github.com/"))
        .stdout(predicate::str::contains("Your first CI runs will fail"));
}

#[test]
fn plan_without_git_lists_removal_and_has_no_side_effects() {
    let home = TempDir::new().unwrap();
    let raw = r#"{"project_name":"demo","initialize_git":"n"}"#;
    let project = project_with(raw);

    sprout(home.path())
        .args(["plan", "--project-dir"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("initialize_git=false"))
        .stdout(predicate::str::contains("remove repository-only files"))
        .stdout(predicate::str::contains(".github"))
        .stdout(predicate::str::contains("poetry --no-ansi -n lock"))
        .stdout(predicate::str::contains("git init").not());

    let after = fs::read_to_string(project.path().join(".cookiecutter.json")).unwrap();
    assert_eq!(after, raw);
}

#[test]
fn plan_json_reports_enforced_verification() {
    let home = TempDir::new().unwrap();
    let project = project_with(r#"{"enforce_checks_on_creation": true}"#);

    let output = sprout(home.path())
        .args(["plan", "--output-format", "json", "--project-dir"])
        .arg(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["initialize_git"], true);
    assert_eq!(value["enforce_checks"], true);
    let steps = value["steps"].as_array().unwrap();
    assert!(steps.iter().any(|s| s["step"] == "install-hooks"));
    assert!(
        steps
            .iter()
            .any(|s| s["step"] == "verify" && s["policy"] == "enforced")
    );
}

#[test]
fn custom_settings_file_name() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("answers.json"), "{}").unwrap();

    sprout(home.path())
        .args(["plan", "--settings", "answers.json", "--project-dir"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("answers.json"));
}

#[test]
fn missing_settings_exits_not_found() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    sprout(home.path())
        .args(["run", "--project-dir"])
        .arg(project.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Settings document not found"));
}

#[test]
fn malformed_settings_exits_configuration_error() {
    let home = TempDir::new().unwrap();
    let project = project_with("{ not json");

    sprout(home.path())
        .args(["run", "--project-dir"])
        .arg(project.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not valid JSON"));

    let after = fs::read_to_string(project.path().join(".cookiecutter.json")).unwrap();
    assert_eq!(after, "{ not json");
}

#[test]
fn unreadable_flag_value_exits_configuration_error() {
    let home = TempDir::new().unwrap();
    let project = project_with(r#"{"initialize_git": "maybe"}"#);

    sprout(home.path())
        .args(["plan", "--project-dir"])
        .arg(project.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("initialize_git"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn missing_explicit_config_file_exits_configuration_error() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .args(["--config"])
        .arg(home.path().join("absent.toml"))
        .arg("notices")
        .assert()
        .code(4);
}

#[test]
fn config_get_honours_environment() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .env("SPROUT_TOOLS__PACKAGE_MANAGER", "uv")
        .args(["config", "get", "tools.package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::diff("uv\n"));
}

#[test]
fn config_get_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .args(["config", "get", "tools.compiler"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_init_then_refuses_second_time() {
    let home = TempDir::new().unwrap();

    sprout(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    sprout(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    sprout(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    sprout(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout"));
}
