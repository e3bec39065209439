//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::DeployConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<DeployConfig> {
    store.load()
}

/// Validate `key = value`, apply it and persist the result.
///
/// Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<DeployConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
