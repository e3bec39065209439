//! Domain types and validators for deploy configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "ssh.host",
    "ssh.user",
    "ssh.port",
    "ssh.identity_file",
    "ssh.strict_host_key_checking",
    "command_timeout_secs",
];

const DEFAULT_SSH_USER: &str = "root";
const DEFAULT_SSH_PORT: u16 = 22;
const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 60;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.fluence-deploy/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// How to reach the target host.
    pub ssh: SshConfig,
    /// Per remote command timeout, in seconds.
    pub command_timeout_secs: u64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            ssh: SshConfig::default(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
        }
    }
}

/// SSH connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    /// Default target host when `--host` is not given.
    pub host: Option<String>,
    pub user: String,
    pub port: u16,
    /// Private key passed to `ssh -i`.
    pub identity_file: Option<String>,
    pub strict_host_key_checking: bool,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            host: None,
            user: DEFAULT_SSH_USER.to_string(),
            port: DEFAULT_SSH_PORT,
            identity_file: None,
            strict_host_key_checking: true,
        }
    }
}

impl DeployConfig {
    /// Every setting as `(key, value)` pairs, in `VALID_CONFIG_KEYS` order.
    /// Unset optional values render as `(unset)`.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let unset = || "(unset)".to_string();
        vec![
            ("ssh.host", self.ssh.host.clone().unwrap_or_else(unset)),
            ("ssh.user", self.ssh.user.clone()),
            ("ssh.port", self.ssh.port.to_string()),
            (
                "ssh.identity_file",
                self.ssh.identity_file.clone().unwrap_or_else(unset),
            ),
            (
                "ssh.strict_host_key_checking",
                self.ssh.strict_host_key_checking.to_string(),
            ),
            ("command_timeout_secs", self.command_timeout_secs.to_string()),
        ]
    }

    /// Validate and apply `key = value`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the key is unknown or the value invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "ssh.host" => self.ssh.host = Some(value.to_string()),
            "ssh.user" => self.ssh.user = value.to_string(),
            "ssh.port" => self.ssh.port = value.parse()?,
            "ssh.identity_file" => self.ssh.identity_file = Some(value.to_string()),
            "ssh.strict_host_key_checking" => self.ssh.strict_host_key_checking = value.parse()?,
            "command_timeout_secs" => self.command_timeout_secs = value.parse()?,
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: &str| -> Result<()> {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: valid.to_string(),
        }
        .into())
    };
    match key {
        "ssh.port" => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(()),
            _ => invalid("1-65535"),
        },
        "ssh.strict_host_key_checking" => match value {
            "true" | "false" => Ok(()),
            _ => invalid("true, false"),
        },
        "command_timeout_secs" => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(()),
            _ => invalid("a positive number of seconds"),
        },
        "ssh.host" | "ssh.user" | "ssh.identity_file" if value.trim().is_empty() => {
            invalid("a non-empty string")
        }
        _ => Ok(()),
    }
}
