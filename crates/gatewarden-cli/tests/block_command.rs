use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_gatewarden_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("gatewarden")
}

fn base_cmd(sub: &str) -> Command {
    let mut cmd = Command::new(get_gatewarden_bin());
    cmd.arg(sub)
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("secret");
    cmd
}

#[test]
fn test_block_command_rejects_invalid_mac() {
    // MAC validation happens before any browser is launched
    let mut cmd = base_cmd("block");
    cmd.arg("not-a-mac").arg("tablet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid MAC address"));
}

#[test]
fn test_block_command_rejects_empty_name() {
    let mut cmd = base_cmd("block");
    cmd.arg("9C:B6:D0:F1:22:A1").arg("   ");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("device name"));
}

#[test]
fn test_unblock_command_rejects_invalid_mac() {
    let mut cmd = base_cmd("unblock");
    cmd.arg("9C:B6");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid MAC address"));
}

#[test]
fn test_block_command_requires_name_argument() {
    let mut cmd = base_cmd("block");
    cmd.arg("9C:B6:D0:F1:22:A1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("NAME"));
}
