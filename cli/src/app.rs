//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()`. Remote commands get their `SshShell` from
//! here so host resolution (flag, then config) lives in one place.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::commands::TargetArgs;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::ssh::{SshShell, SshTarget};
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration file store.
    pub config_store: YamlConfigStore,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config_store: YamlConfigStore::from_env(),
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Open a shell on the host named by `target`, falling back to config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or no host is known.
    pub fn remote_shell(&self, target: &TargetArgs) -> Result<SshShell<TokioCommandRunner>> {
        let config = self.config_store.load()?;
        let mut ssh = config.ssh;
        if let Some(user) = &target.ssh_user {
            ssh.user.clone_from(user);
        }
        if let Some(port) = target.ssh_port {
            ssh.port = port;
        }
        if let Some(identity) = &target.identity {
            ssh.identity_file = Some(identity.display().to_string());
        }
        let ssh_target = SshTarget::from_config(&ssh, target.host.as_deref())?;
        let timeout = Duration::from_secs(config.command_timeout_secs);
        Ok(SshShell::new(
            ssh_target,
            TokioCommandRunner::new(timeout),
            timeout,
        ))
    }
}
