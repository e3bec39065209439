//! Integration tests for `register-command` and `register`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{EXPECTED_COMMAND, RECORD_YAML, Sandbox};

#[test]
fn test_register_command_prints_exact_line() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd()
        .args(["register-command", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .success()
        .stdout(format!("{EXPECTED_COMMAND}\n"));
}

#[test]
fn test_register_command_reads_secret_from_env() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd()
        .env("FLUENCE_SECRET_KEY", "SECRET")
        .arg("register-command")
        .arg("--record")
        .arg(&record)
        .assert()
        .success()
        .stdout(format!("{EXPECTED_COMMAND}\n"));
}

#[test]
fn test_register_command_accepts_json_record() {
    let sandbox = Sandbox::new();
    let record = sandbox.write(
        "node.json",
        r#"{"node_ip":"1.2.3.4","tendermint_key":"TK","tendermint_node_id":"NID",
            "contract_address":"0xABC","account":"acct1","api_port":25000,
            "capacity":3,"ethereum_address":"https://eth.example"}"#,
    );
    sandbox
        .cmd()
        .args(["register-command", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .success()
        .stdout(format!("{EXPECTED_COMMAND}\n"));
}

#[test]
fn test_register_command_keeps_unquoted_hex_address() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", &RECORD_YAML.replace("\"0xABC\"", "0xABC"));
    sandbox
        .cmd()
        .args(["register-command", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .success()
        .stdout(format!("{EXPECTED_COMMAND}\n"));
}

#[test]
fn test_register_command_json_output() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    let output = sandbox
        .cmd()
        .args(["register-command", "--json", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["command"], EXPECTED_COMMAND);
}

#[test]
fn test_register_command_missing_capacity_prints_nothing() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", &RECORD_YAML.replace("capacity: 3\n", ""));
    sandbox
        .cmd()
        .args(["register-command", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("missing required key 'capacity'"));
}

#[test]
fn test_register_command_requires_secret() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd()
        .arg("register-command")
        .arg("--record")
        .arg(&record)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--secret-key"));
}

#[cfg(unix)]
#[test]
fn test_register_runs_command_on_host() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd_with_ssh("echo 'Node registered'")
        .args(["register", "--host", "node-1", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Node registered"));
    let commands = sandbox.remote_commands();
    assert_eq!(commands, [EXPECTED_COMMAND]);
}

#[cfg(unix)]
#[test]
fn test_register_keeps_secret_out_of_ssh_argv() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd_with_ssh("echo 'Node registered'")
        .env("FLUENCE_SECRET_KEY", "SECRET")
        .args(["register", "--host", "node-1", "--record"])
        .arg(&record)
        .assert()
        .success();
    let argvs = sandbox.ssh_argvs();
    assert_eq!(argvs.len(), 1);
    assert!(!argvs[0].contains("SECRET"), "secret in argv: {}", argvs[0]);
    assert!(argvs[0].ends_with("root@node-1 /bin/bash -l -s"));
    assert_eq!(sandbox.remote_commands(), [EXPECTED_COMMAND]);
}

#[test]
fn test_register_command_help_recommends_env_secret() {
    Sandbox::new()
        .cmd()
        .args(["register-command", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prefer setting FLUENCE_SECRET_KEY"));
}

#[cfg(unix)]
#[test]
fn test_register_failure_hides_secret() {
    let sandbox = Sandbox::new();
    let record = sandbox.write("node.yaml", RECORD_YAML);
    sandbox
        .cmd_with_ssh("echo 'insufficient funds' >&2; exit 1")
        .args(["register", "--host", "node-1", "--secret-key", "SECRET", "--record"])
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient funds"))
        .stderr(predicate::str::contains("SECRET").not());
    assert_eq!(sandbox.remote_commands().len(), 1, "no retry");
}
