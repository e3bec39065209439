//! Application service — docker group and socket setup on the target host.
//!
//! Group setup is best-effort: failures are logged and swallowed. Socket
//! setup is strict: the first failure is returned and nothing is retried.

use anyhow::{Context, Result};

use crate::application::ports::RemoteShell;
use crate::domain::docker;

/// Create the docker group and add `user` to it.
///
/// Never fails. Both commands already mask their exit status on the host;
/// transport errors are logged at `warn` and dropped.
pub async fn ensure_docker_group(shell: &impl RemoteShell, user: &str) {
    for command in [docker::create_group(), docker::add_user_to_group(user)] {
        if let Err(e) = shell.run(&command).await {
            tracing::warn!(
                host = shell.host(),
                %command,
                error = %format!("{e:#}"),
                "ignoring failed docker group command"
            );
        }
    }
}

/// Make the docker socket world-readable and owned by `user:docker`.
///
/// # Errors
///
/// Returns the first remote failure; the chown is not attempted if the
/// chmod fails.
pub async fn fix_docker_socket(shell: &impl RemoteShell, user: &str) -> Result<()> {
    shell
        .run(&docker::make_socket_readable())
        .await
        .context("cannot make docker socket readable")?;
    shell
        .run(&docker::chown_socket(user))
        .await
        .with_context(|| format!("cannot hand docker socket to {user}"))?;
    Ok(())
}

/// Read the numeric GID of the docker group, as printed by the host.
///
/// # Errors
///
/// Returns an error if the query fails or does not print exactly one line
/// (no docker group, or several groups matching "docker").
pub async fn docker_group_id(shell: &impl RemoteShell) -> Result<String> {
    let command = docker::query_group_id();
    let output = shell
        .run(&command)
        .await
        .context("cannot query docker group id")?;
    Ok(output.single_line(&command)?)
}

/// Full docker setup for `user`: group, socket, then GID lookup.
///
/// # Errors
///
/// Returns an error from `fix_docker_socket` or `docker_group_id`.
pub async fn prepare_docker_access(shell: &impl RemoteShell, user: &str) -> Result<String> {
    ensure_docker_group(shell, user).await;
    fix_docker_socket(shell, user).await?;
    docker_group_id(shell).await
}
