//! `fluence-deploy docker` — docker group and socket setup on the target host.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::services::docker_access;
use crate::commands::TargetArgs;

/// Docker subcommands.
#[derive(Subcommand)]
pub enum DockerCommand {
    /// Create the docker group and add a user to it (never fails)
    EnsureGroup(UserArgs),
    /// Make the docker socket readable and owned by a user
    FixSocket(UserArgs),
    /// Print the docker group id
    Gid(TargetArgs),
    /// Ensure the group, fix the socket, then print the docker group id
    Prepare(UserArgs),
}

/// A host user plus connection flags.
#[derive(Args)]
pub struct UserArgs {
    /// User that should get docker access
    #[arg(long)]
    pub user: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Run the docker command.
pub async fn run(app: &AppContext, cmd: DockerCommand) -> Result<()> {
    match cmd {
        DockerCommand::EnsureGroup(args) => {
            let shell = app.remote_shell(&args.target)?;
            // Failures were logged and dropped, so this cannot claim membership.
            docker_access::ensure_docker_group(&shell, &args.user).await;
            app.output
                .info(&format!("docker group ensured for {}", args.user));
        }
        DockerCommand::FixSocket(args) => {
            let shell = app.remote_shell(&args.target)?;
            docker_access::fix_docker_socket(&shell, &args.user).await?;
            app.output
                .success(&format!("docker socket owned by {}", args.user));
        }
        DockerCommand::Gid(target) => {
            let shell = app.remote_shell(&target)?;
            let gid = docker_access::docker_group_id(&shell).await?;
            print_gid(app, &gid);
        }
        DockerCommand::Prepare(args) => {
            let shell = app.remote_shell(&args.target)?;
            let gid = docker_access::prepare_docker_access(&shell, &args.user).await?;
            app.output
                .success(&format!("docker access ready for {}", args.user));
            print_gid(app, &gid);
        }
    }
    Ok(())
}

fn print_gid(app: &AppContext, gid: &str) {
    if app.is_json() {
        println!("{}", serde_json::json!({ "gid": gid }));
    } else {
        println!("{gid}");
    }
}
