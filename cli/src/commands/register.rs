//! `fluence-deploy register-command` and `fluence-deploy register`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RemoteShell;
use crate::application::services::register::register_node;
use crate::commands::TargetArgs;
use crate::domain::register_command;
use crate::infra::record::load_record;

/// Node record and secret shared by both register commands.
#[derive(Args)]
pub struct RegisterCommandArgs {
    /// Node record file (YAML or JSON mapping)
    #[arg(long, value_name = "FILE")]
    pub record: PathBuf,

    /// Account secret key, passed to fluence as --secret_key.
    ///
    /// Prefer setting FLUENCE_SECRET_KEY: a value given on the command line
    /// is visible to other local users in the process list.
    #[arg(long, env = "FLUENCE_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,
}

/// Arguments for `register`.
#[derive(Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub node: RegisterCommandArgs,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Print the `./fluence register` line without running it.
pub fn print_command(app: &AppContext, args: &RegisterCommandArgs) -> Result<()> {
    let record = load_record(&args.record)?;
    let command = register_command(&record, &args.secret_key);
    if app.is_json() {
        println!("{}", serde_json::json!({ "command": command }));
    } else {
        println!("{command}");
    }
    Ok(())
}

/// Run `./fluence register` on the target host.
pub async fn run(app: &AppContext, args: &RegisterArgs) -> Result<()> {
    let record = load_record(&args.node.record)?;
    let shell = app.remote_shell(&args.target)?;
    let output = register_node(&shell, &record, &args.node.secret_key).await?;
    print!("{}", output.stdout);
    app.output.success(&format!(
        "Registered node {} from {}",
        record.node_ip,
        shell.host()
    ));
    Ok(())
}
