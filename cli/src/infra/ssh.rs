//! Infrastructure implementation of the `RemoteShell` port over OpenSSH.
//!
//! Every command is wrapped in `/bin/bash -l -c '<command>'` on the host, so
//! bash syntax such as `&>` works regardless of the login shell. Commands
//! that carry a secret are written to `/bin/bash -l -s` on ssh's stdin
//! instead, keeping the secret out of the local process list.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, RemoteShell};
use crate::domain::{RemoteCommand, RemoteError, RemoteOutput, SshConfig};

/// Shell used on the host to interpret each command.
pub const REMOTE_SHELL: &str = "/bin/bash -l -c";

/// Host shell that reads its script from stdin.
pub const REMOTE_STDIN_SHELL: &str = "/bin/bash -l -s";

/// Where and as whom to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    pub host: String,
    pub user: String,
    pub port: u16,
    pub identity_file: Option<PathBuf>,
    pub strict_host_key_checking: bool,
}

impl SshTarget {
    /// Build a target from configuration, with `host` overriding `ssh.host`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NoHost` when neither names a host.
    pub fn from_config(config: &SshConfig, host: Option<&str>) -> Result<Self, RemoteError> {
        let host = host
            .map(str::to_string)
            .or_else(|| config.host.clone())
            .filter(|h| !h.trim().is_empty())
            .ok_or(RemoteError::NoHost)?;
        Ok(Self {
            host,
            user: config.user.clone(),
            port: config.port,
            identity_file: config.identity_file.as_ref().map(PathBuf::from),
            strict_host_key_checking: config.strict_host_key_checking,
        })
    }

    /// `ssh` arguments that run `command` on this target.
    #[must_use]
    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = self.connect_args();
        args.push(format!("{REMOTE_SHELL} {}", shell_quote(command)));
        args
    }

    /// `ssh` arguments for a host shell that reads the command from stdin.
    #[must_use]
    pub fn ssh_stdin_args(&self) -> Vec<String> {
        let mut args = self.connect_args();
        args.push(REMOTE_STDIN_SHELL.to_string());
        args
    }

    fn connect_args(&self) -> Vec<String> {
        let mut args = vec![
            "-p".to_string(),
            self.port.to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
        ];
        if !self.strict_host_key_checking {
            args.push("-o".to_string());
            args.push("StrictHostKeyChecking=no".to_string());
        }
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push("--".to_string());
        args.push(format!("{}@{}", self.user, self.host));
        args
    }
}

/// Quote `s` as a single POSIX shell word.
#[must_use]
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// `RemoteShell` that runs each command through a fresh `ssh` process.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct SshShell<R: CommandRunner> {
    target: SshTarget,
    runner: R,
    timeout: Duration,
}

impl<R: CommandRunner> SshShell<R> {
    pub fn new(target: SshTarget, runner: R, timeout: Duration) -> Self {
        Self {
            target,
            runner,
            timeout,
        }
    }

    #[must_use]
    pub fn target(&self) -> &SshTarget {
        &self.target
    }
}

impl<R: CommandRunner> RemoteShell for SshShell<R> {
    fn host(&self) -> &str {
        &self.target.host
    }

    async fn run(&self, command: &RemoteCommand) -> Result<RemoteOutput> {
        tracing::debug!(host = %self.target.host, %command, "running remote command");
        let output = if command.is_redacted() {
            let args = self.target.ssh_stdin_args();
            let argv: Vec<&str> = args.iter().map(String::as_str).collect();
            let script = format!("{}\n", command.as_str());
            self.runner
                .run_with_stdin("ssh", &argv, script.as_bytes(), self.timeout)
                .await
        } else {
            let args = self.target.ssh_args(command.as_str());
            let argv: Vec<&str> = args.iter().map(String::as_str).collect();
            self.runner
                .run_with_timeout("ssh", &argv, self.timeout)
                .await
        }
        .with_context(|| format!("ssh {}@{}", self.target.user, self.target.host))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            tracing::debug!(host = %self.target.host, %command, status = %output.status, "remote command failed");
            return Err(RemoteError::CommandFailed {
                host: self.target.host.clone(),
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            }
            .into());
        }
        Ok(RemoteOutput { stdout, stderr })
    }
}
