//! Command implementations

pub mod config;
pub mod docker;
pub mod register;
pub mod version;

use std::path::PathBuf;

use clap::Args;

/// Connection flags shared by every command that touches the target host.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Target host (overrides ssh.host)
    #[arg(long)]
    pub host: Option<String>,

    /// SSH login user (overrides ssh.user)
    #[arg(long = "ssh-user", value_name = "USER")]
    pub ssh_user: Option<String>,

    /// SSH port (overrides ssh.port)
    #[arg(long = "ssh-port", value_name = "PORT")]
    pub ssh_port: Option<u16>,

    /// SSH private key (overrides ssh.identity_file)
    #[arg(long, value_name = "FILE")]
    pub identity: Option<PathBuf>,
}
