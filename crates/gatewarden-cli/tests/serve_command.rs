use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_gatewarden_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("gatewarden")
}

#[test]
fn test_serve_command_help() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Run the REST API server"))
        .stdout(predicate::str::contains("--router-host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--allowed-origin"));
}

#[test]
fn test_serve_command_rejects_bad_port() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("serve").arg("--port").arg("not-a-port");

    cmd.assert().failure();
}

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("devices"))
        .stdout(predicate::str::contains("blocked"))
        .stdout(predicate::str::contains("reboot"));
}
