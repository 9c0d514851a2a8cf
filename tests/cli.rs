use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn workdir(config: serde_json::Value) -> TempDir {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("config.json"), config.to_string()).unwrap();
    tmp
}

fn valid_workdir() -> TempDir {
    workdir(json!({
        "verbose": false,
        "api_key": "asicj738z8fhse7h28783hiuh",
        "max_pages": 3
    }))
}

#[test]
fn known_command_prints_confirmation() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "test"])
        .assert()
        .success()
        .stdout("command1 called with parameter test\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_arguments_shows_help_and_exits_two() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stdout(
            predicate::str::contains("command1")
                .and(predicate::str::contains("command2"))
                .and(predicate::str::contains("\"api_key\"")),
        );
}

#[test]
fn unknown_command_exits_one() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command9", "test"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: invalid command or command missing",
        ));
}

#[test]
fn missing_api_key_exits_one() {
    let tmp = workdir(json!({ "verbose": true, "max_pages": 3 }));
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command2", "test"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No API key set"));
}

#[test]
fn missing_config_file_fails() {
    let tmp = tempdir().unwrap();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "test"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::starts_with("Error: failed to load configuration")
                .and(predicate::str::contains("config.json"))
                .and(predicate::function(|stderr: &str| {
                    stderr.matches("os error").count() == 1
                })),
        );
}

#[test]
fn malformed_config_file_fails() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("config.json"), "{ not json").unwrap();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "test"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("failed to parse")
                .and(predicate::function(|stderr: &str| {
                    stderr.matches("key must be a string").count() == 1
                })),
        );
}

#[test]
fn null_config_values_fall_back_to_defaults() {
    let tmp = workdir(json!({ "verbose": null, "api_key": "k", "max_pages": null }));
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "test"])
        .assert()
        .success()
        .stdout("command1 called with parameter test\n");
}

#[test]
fn command_help_skips_command() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "-help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("-count")
                .and(predicate::str::contains("called with parameter").not()),
        );
}

#[test]
fn verbose_flag_writes_debug_output() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command2", "-v", "-count", "5", "test"])
        .assert()
        .success()
        .stdout("command2 called with parameter test\n")
        .stderr(
            predicate::str::contains("verbose flag active")
                .and(predicate::str::contains("max_pages: 5")),
        );
}

#[test]
fn missing_parameter_exits_one() {
    let tmp = valid_workdir();
    cargo_bin_cmd!("clistarter")
        .current_dir(tmp.path())
        .args(["command1", "-v"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: No parameters given!"));
}
