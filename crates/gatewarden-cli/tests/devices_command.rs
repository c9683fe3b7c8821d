use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_gatewarden_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("gatewarden")
}

#[test]
fn test_devices_command_help() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("devices").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("List devices connected"))
        .stdout(predicate::str::contains("--username"))
        .stdout(predicate::str::contains("--password"))
        .stdout(predicate::str::contains("--router-host"));
}

#[test]
fn test_devices_command_requires_credentials() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("devices")
        .env_remove("ROUTER_USERNAME")
        .env_remove("ROUTER_PASSWORD");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--username"));
}

#[test]
fn test_devices_command_rejects_unknown_format() {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg("devices")
        .arg("--format")
        .arg("not-a-format")
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("secret");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not-a-format"));
}
