//! Tests for the docker group and socket routines.
//!
//! Group setup swallows every failure; socket setup stops at the first one.

#![allow(clippy::expect_used)]

use fluence_deploy::application::services::docker_access::{
    docker_group_id, ensure_docker_group, fix_docker_socket, prepare_docker_access,
};
use fluence_deploy::domain::{RemoteError, RemoteOutput};

use crate::mocks::{MockShell, command_failed};

const CREATE_GROUP: &str = "groupadd docker &>/dev/null || true";
const ADD_USER: &str = "usermod -aG docker fluence || true";
const CHMOD: &str = "chmod a+r /var/run/docker.sock";
const CHOWN: &str = "chown fluence:docker /var/run/docker.sock";
const GID_QUERY: &str = "grep docker /etc/group | cut -d ':' -f 3";

// ── ensure_docker_group ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_ensure_group_runs_create_then_usermod() {
    let shell = MockShell::ok();
    ensure_docker_group(&shell, "fluence").await;
    assert_eq!(shell.calls(), [CREATE_GROUP, ADD_USER]);
}

#[tokio::test]
async fn test_ensure_group_swallows_unreachable_host() {
    let shell = MockShell::failing();
    ensure_docker_group(&shell, "fluence").await;
    assert_eq!(shell.calls().len(), 2, "second command still attempted");
}

#[tokio::test]
async fn test_ensure_group_swallows_command_failure() {
    let shell = MockShell::new(vec![Err(command_failed(CREATE_GROUP)), Err(command_failed(ADD_USER))]);
    ensure_docker_group(&shell, "fluence").await;
    assert_eq!(shell.calls(), [CREATE_GROUP, ADD_USER]);
}

#[tokio::test]
async fn test_ensure_group_is_repeatable() {
    let shell = MockShell::ok();
    ensure_docker_group(&shell, "fluence").await;
    ensure_docker_group(&shell, "fluence").await;
    assert_eq!(shell.calls(), [CREATE_GROUP, ADD_USER, CREATE_GROUP, ADD_USER]);
}

// ── fix_docker_socket ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fix_socket_runs_chmod_then_chown() {
    let shell = MockShell::ok();
    fix_docker_socket(&shell, "fluence").await.expect("fix socket");
    assert_eq!(shell.calls(), [CHMOD, CHOWN]);
}

#[tokio::test]
async fn test_fix_socket_propagates_second_failure_without_retry() {
    let shell = MockShell::new(vec![
        Ok(RemoteOutput::default()),
        Err(command_failed(CHOWN)),
    ]);
    let err = fix_docker_socket(&shell, "fluence").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RemoteError>(),
        Some(RemoteError::CommandFailed { command, .. }) if command == CHOWN
    ));
    assert_eq!(shell.calls(), [CHMOD, CHOWN], "chown must not be retried");
}

#[tokio::test]
async fn test_fix_socket_stops_after_chmod_failure() {
    let shell = MockShell::new(vec![Err(command_failed(CHMOD))]);
    let err = fix_docker_socket(&shell, "fluence").await.unwrap_err();
    assert!(format!("{err:#}").contains("cannot make docker socket readable"));
    assert_eq!(shell.calls(), [CHMOD]);
}

#[tokio::test]
async fn test_fix_socket_propagates_unreachable_host() {
    let shell = MockShell::failing();
    assert!(fix_docker_socket(&shell, "fluence").await.is_err());
    assert_eq!(shell.calls().len(), 1);
}

// ── docker_group_id ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_group_id_returns_single_line() {
    let shell = MockShell::with_stdout("999\n");
    assert_eq!(docker_group_id(&shell).await.expect("gid"), "999");
    assert_eq!(shell.calls(), [GID_QUERY]);
}

#[tokio::test]
async fn test_group_id_is_not_parsed() {
    let shell = MockShell::with_stdout("0999");
    assert_eq!(docker_group_id(&shell).await.expect("gid"), "0999");
}

#[tokio::test]
async fn test_group_id_rejects_missing_group() {
    let shell = MockShell::with_stdout("");
    let err = docker_group_id(&shell).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RemoteError>(),
        Some(RemoteError::UnexpectedLineCount { expected: 1, actual: 0, .. })
    ));
}

#[tokio::test]
async fn test_group_id_rejects_two_matching_groups() {
    let shell = MockShell::with_stdout("999\n1001\n");
    let err = docker_group_id(&shell).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RemoteError>(),
        Some(RemoteError::UnexpectedLineCount { actual: 2, .. })
    ));
}

#[tokio::test]
async fn test_group_id_propagates_query_failure() {
    let shell = MockShell::new(vec![Err(command_failed(GID_QUERY))]);
    let err = docker_group_id(&shell).await.unwrap_err();
    assert!(format!("{err:#}").contains("cannot query docker group id"));
}

// ── prepare_docker_access ────────────────────────────────────────────────────

#[tokio::test]
async fn test_prepare_runs_all_steps_in_order() {
    let shell = MockShell::new(vec![
        Ok(RemoteOutput::default()),
        Ok(RemoteOutput::default()),
        Ok(RemoteOutput::default()),
        Ok(RemoteOutput::default()),
        Ok(RemoteOutput::from_stdout("998\n")),
    ]);
    let gid = prepare_docker_access(&shell, "fluence").await.expect("prepare");
    assert_eq!(gid, "998");
    assert_eq!(shell.calls(), [CREATE_GROUP, ADD_USER, CHMOD, CHOWN, GID_QUERY]);
}

#[tokio::test]
async fn test_prepare_continues_past_group_failure_but_not_socket_failure() {
    let shell = MockShell::new(vec![
        Err(command_failed(CREATE_GROUP)),
        Err(command_failed(ADD_USER)),
        Err(command_failed(CHMOD)),
    ]);
    assert!(prepare_docker_access(&shell, "fluence").await.is_err());
    assert_eq!(shell.calls(), [CREATE_GROUP, ADD_USER, CHMOD]);
}
