//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Record errors ─────────────────────────────────────────────────────────────

/// Errors raised while reading a node registration record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("node record is missing required key '{key}'")]
    MissingField { key: &'static str },

    #[error("node record value for '{key}' must be a string, number or bool")]
    NonScalarValue { key: String },

    #[error("node record keys must be strings")]
    NonStringKey,
}

// ── Remote errors ─────────────────────────────────────────────────────────────

/// Errors raised by commands executed on the target host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("`{command}` failed on {host} ({status}): {stderr}")]
    CommandFailed {
        host: String,
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{command}` printed {actual} line(s), expected exactly {expected}")]
    UnexpectedLineCount {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("No target host. Pass --host or run: fluence-deploy config set ssh.host <host>")]
    NoHost,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
