//! Application service — node registration on the target host.

use anyhow::{Context, Result};

use crate::application::ports::RemoteShell;
use crate::domain::registration::{NodeRegistration, remote_register_command};
use crate::domain::RemoteOutput;

/// Run `./fluence register` for `record` on the host behind `shell`.
///
/// The secret key never appears in logs or error messages.
///
/// # Errors
///
/// Returns an error if the registration command fails; it is not retried.
pub async fn register_node(
    shell: &impl RemoteShell,
    record: &NodeRegistration,
    secret_key: &str,
) -> Result<RemoteOutput> {
    let command = remote_register_command(record, secret_key);
    tracing::info!(host = shell.host(), node_ip = %record.node_ip, "registering node");
    shell
        .run(&command)
        .await
        .with_context(|| format!("cannot register node {}", record.node_ip))
}
