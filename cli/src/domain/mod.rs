//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod docker;
pub mod error;
pub mod registration;
pub mod remote;

pub use config::{DeployConfig, SshConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, RecordError, RemoteError};
pub use registration::{NodeRegistration, register_command, register_command_from_map};
pub use remote::{RemoteCommand, RemoteOutput};
