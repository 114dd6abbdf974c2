//! Basic CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_generate_command() {
    let mut cmd = Command::cargo_bin("spindle").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    let mut cmd = Command::cargo_bin("spindle").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    let mut cmd = Command::cargo_bin("spindle").unwrap();
    cmd.assert().failure().code(2);
}

#[test]
fn completions_bash_emits_a_script() {
    let mut cmd = Command::cargo_bin("spindle").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn generate_help_shows_the_flags() {
    let mut cmd = Command::cargo_bin("spindle").unwrap();
    cmd.args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template-dir"))
        .stdout(predicate::str::contains("--defaults"))
        .stdout(predicate::str::contains("--framework"));
}
