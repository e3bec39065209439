//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Fluence node deployment helper
#[derive(Parser)]
#[command(
    name = "fluence-deploy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log remote commands (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the fluence register command for a node record
    RegisterCommand(commands::register::RegisterCommandArgs),

    /// Register a node by running fluence register on the target host
    Register(commands::register::RegisterArgs),

    /// Manage docker access on the target host
    #[command(subcommand)]
    Docker(commands::docker::DockerCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::RegisterCommand(args) => commands::register::print_command(&app, &args),
            Command::Register(args) => commands::register::run(&app, &args).await,
            Command::Docker(cmd) => commands::docker::run(&app, cmd).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
        }
    }
}
