//! Application context for the recipes CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use recipe_core::{RecipeService, SqliteRecordStore};

use crate::cli::Cli;
use crate::config::RecipeConfig;
use crate::errors::CliError;
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{load_config, resolve_store_path};

/// Service type every command works with.
pub type Service = RecipeService<SqliteRecordStore>;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<RecipeConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading it lazily. `None` if no config exists.
    pub fn config(&self) -> anyhow::Result<Option<&RecipeConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    /// Resolve the store path for this invocation.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Build a UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }

    /// Open the recipe store and wrap it in the service.
    ///
    /// Fails with a not-found error if the store file does not exist yet.
    pub fn open_service(&self) -> anyhow::Result<Service> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Run `recipes init` to create it.",
            )
            .into());
        }
        debug!(path = %path.display(), "opening recipe store");
        let store = SqliteRecordStore::open(&path)?;
        Ok(RecipeService::new(store))
    }
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!("No recipe store found at {}", path.display())
}
