use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_gatewarden_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("gatewarden")
}

#[test]
fn test_completion_bash() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("completion").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gatewarden"));
}

#[test]
fn test_completion_zsh() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("completion").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gatewarden"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("completion").arg("dos");

    cmd.assert().failure();
}
