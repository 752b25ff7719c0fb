use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use recipe_core::DEFAULT_STORE_FILE;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub seed: SeedSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedSection {
    /// Add the sample recipes when `init` finds an empty store
    #[serde(default = "default_seed_on_empty")]
    pub on_empty: bool,
}

impl Default for SeedSection {
    fn default() -> Self {
        Self {
            on_empty: default_seed_on_empty(),
        }
    }
}

fn default_seed_on_empty() -> bool {
    true
}

impl RecipeConfig {
    pub fn new(store_path: PathBuf, seed_on_empty: bool) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            seed: SeedSection {
                on_empty: seed_on_empty,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_STORE_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<RecipeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &RecipeConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("recipes"));
        }
    }
    Ok(home_dir()?.join(".config").join("recipes"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("recipes"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("recipes"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
