use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LOGIN_SUITE: &str = "*** Test Cases ***\nCase One\n    Log    hi\nCase Two\n    Log    bye\n\n*** Keywords ***\nMy Kw\n    Log    kw\n";

fn robot_runnables() -> Command {
    Command::cargo_bin("robot-runnables").unwrap()
}

fn project_with_suite() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("login.robot"), LOGIN_SUITE).unwrap();
    dir
}

#[test]
fn analyze_lists_markers() {
    let dir = project_with_suite();
    robot_runnables()
        .arg("analyze")
        .arg(dir.path().join("login.robot"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 runnable(s)"))
        .stdout(predicate::str::contains("line 1: run all (all Test Cases)"))
        .stdout(predicate::str::contains("line 2: run Case One (Test Cases)"))
        .stdout(predicate::str::contains("line 4: run Case Two (Test Cases)"))
        .stdout(predicate::str::contains("My Kw").not());
}

#[test]
fn analyze_verbose_prints_json() {
    let dir = project_with_suite();
    let output = robot_runnables()
        .arg("analyze")
        .arg(dir.path().join("login.robot"))
        .arg("--verbose")
        .output()
        .unwrap();
    assert!(output.status.success());

    let markers: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = markers
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.get("runnable_name").and_then(|n| n.as_str()))
        .collect();
    assert_eq!(names, vec![None, Some("Case One"), Some("Case Two")]);
}

#[test]
fn analyze_line_picks_owning_case() {
    let dir = project_with_suite();
    let target = format!("{}:5", dir.path().join("login.robot").display());
    robot_runnables()
        .args(["analyze", &target])
        .assert()
        .success()
        .stdout(predicate::str::contains("Runnable at line 5"))
        .stdout(predicate::str::contains("run Case Two"));
}

#[test]
fn analyze_line_in_keywords_has_no_runnable() {
    let dir = project_with_suite();
    let target = format!("{}:8", dir.path().join("login.robot").display());
    robot_runnables()
        .args(["analyze", &target])
        .assert()
        .success()
        .stdout(predicate::str::contains("No runnable found at line 8"));
}

#[test]
fn analyze_directory_walks_suites() {
    let dir = project_with_suite();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(
        dir.path().join("nested").join("jobs.robot"),
        "*** Tasks ***\nBackup\n    Log    go\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "*** Tasks ***\nIgnored\n").unwrap();

    robot_runnables()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("login.robot (3 runnable(s))"))
        .stdout(predicate::str::contains("jobs.robot (2 runnable(s))"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn analyze_tree_dumps_document() {
    let dir = project_with_suite();
    robot_runnables()
        .arg("analyze")
        .arg(dir.path().join("login.robot"))
        .arg("--tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("HEADING@0..18"))
        .stdout(predicate::str::contains("NEW_LINE"));
}

#[test]
fn command_for_case_line() {
    let dir = project_with_suite();
    let target = format!("{}:3", dir.path().join("login.robot").display());
    robot_runnables()
        .args(["command", &target])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("robot --test 'Case One' "))
        .stdout(predicate::str::contains("login.robot"));
}

#[test]
fn command_without_line_runs_whole_file() {
    let dir = project_with_suite();
    robot_runnables()
        .arg("command")
        .arg(dir.path().join("login.robot"))
        .assert()
        .success()
        .stdout(predicate::str::contains("--test").not())
        .stdout(predicate::str::starts_with("robot "));
}

#[test]
fn command_uses_project_config() {
    let dir = project_with_suite();
    fs::write(
        dir.path().join(".robot-runner.json"),
        r#"{ "runner": { "command": "python -m robot", "extra_args": ["--dryrun"] } }"#,
    )
    .unwrap();
    let target = format!("{}:2", dir.path().join("login.robot").display());
    robot_runnables()
        .args(["command", &target])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "python -m robot --dryrun --test 'Case One' ",
        ));
}

#[test]
fn command_in_keywords_fails() {
    let dir = project_with_suite();
    let target = format!("{}:8", dir.path().join("login.robot").display());
    robot_runnables()
        .args(["command", &target])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No runnable found"));
}

#[test]
fn missing_file_is_reported() {
    robot_runnables()
        .args(["analyze", "does/not/exist.robot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    robot_runnables()
        .args(["init", "--cwd"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let written = fs::read_to_string(dir.path().join(".robot-runner.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(config["suite_extensions"], serde_json::json!(["robot"]));
}

#[test]
fn init_keeps_existing_config_without_force() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".robot-runner.json");
    fs::write(&config_path, "{}").unwrap();

    robot_runnables()
        .args(["init", "--cwd"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");

    robot_runnables()
        .args(["init", "--force", "--cwd"])
        .arg(dir.path())
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&config_path).unwrap(), "{}");
}

#[test]
fn analyze_directory_verbose_lists_reports() {
    let dir = project_with_suite();
    let output = robot_runnables()
        .arg("analyze")
        .arg(dir.path())
        .arg("--verbose")
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]["path"].as_str().unwrap().ends_with("login.robot"));
    assert_eq!(reports[0]["markers"].as_array().unwrap().len(), 3);
}

#[test]
fn analyze_suite_with_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    let suite = dir.path().join("windows.robot");
    fs::write(&suite, format!("\u{FEFF}{LOGIN_SUITE}")).unwrap();
    robot_runnables()
        .arg("analyze")
        .arg(&suite)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 runnable(s)"));
}
