//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, RecipeConfig};

/// Resolve the config file path, checking RECIPES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("RECIPES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists.
pub fn load_config() -> anyhow::Result<Option<RecipeConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Resolve the store path: `--db` / RECIPES_DB, then config, then the default.
pub fn resolve_store_path(cli: &Cli, config: Option<&RecipeConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }

    default_store_path()
}
