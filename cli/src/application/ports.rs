//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{DeployConfig, RemoteCommand, RemoteOutput};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts local process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program with `input` written to its stdin, then closed.
    ///
    /// # Errors
    ///
    /// Same as `run_with_timeout`.
    async fn run_with_stdin(
        &self,
        program: &str,
        args: &[&str],
        input: &[u8],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Remote Shell Port ─────────────────────────────────────────────────────────

/// An open line to one target host.
///
/// The host is carried by the implementation, so every routine that touches
/// the host receives it explicitly.
#[allow(async_fn_in_trait)]
pub trait RemoteShell {
    /// Name of the target host, for logs and error messages.
    fn host(&self) -> &str;

    /// Run `command` through the host's shell and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::CommandFailed` when the command exits non-zero,
    /// or the transport error when the host cannot be reached.
    async fn run(&self, command: &RemoteCommand) -> Result<RemoteOutput>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<DeployConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &DeployConfig) -> Result<()>;
    /// Resolved path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
