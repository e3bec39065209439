//! `fluence-deploy config` — show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::infra::config::CONFIG_ENV;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

/// Run the config command.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => {
            config_service::set_value(&app.config_store, &key, &value)?;
            app.output.success(&format!("Set {key} = {value}"));
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", app.config_store.path()?.display());
            Ok(())
        }
    }
}

fn show_config(app: &AppContext) -> Result<()> {
    let config = config_service::load_config(&app.config_store)?;
    let path = app.config_store.path()?;
    if app.is_json() {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    app.output
        .info(&format!("{} (override with {CONFIG_ENV})", path.display()));
    for (key, value) in config.entries() {
        app.output.kv(key, &value);
    }
    Ok(())
}
