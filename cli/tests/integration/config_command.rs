//! Integration tests for `fluence-deploy config`.
//!
//! Every test points `FLUENCE_DEPLOY_CONFIG` at a temp path so the user's
//! `~/.fluence-deploy/config.yaml` is never read or written.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn test_config_show_without_file_uses_defaults() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ssh.user"))
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::contains("command_timeout_secs"));
    assert!(!sandbox.config_path().exists(), "show must not create the file");
}

#[test]
fn test_config_path_prints_override() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            sandbox.config_path().display().to_string(),
        ));
}

#[test]
fn test_config_set_then_show_round_trips() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "set", "ssh.host", "10.0.0.9"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["config", "set", "ssh.port", "2222"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.9"))
        .stdout(predicate::str::contains("2222"));
}

#[test]
fn test_config_show_json() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "set", "ssh.user", "fluence"])
        .assert()
        .success();
    let output = sandbox
        .cmd()
        .args(["config", "show", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["ssh"]["user"], "fluence");
    assert_eq!(value["ssh"]["port"], 22);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "set", "ssh.password", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting: ssh.password"));
    assert!(!sandbox.config_path().exists());
}

#[test]
fn test_config_set_invalid_port_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "set", "ssh.port", "99999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for ssh.port"));
}
