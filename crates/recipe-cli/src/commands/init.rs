use std::path::{Path, PathBuf};

use tracing::info;

use recipe_core::{RecipeService, RecordStore, SqliteRecordStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{read_config, write_config, RecipeConfig};
use crate::ui::{hint, print, receipt, OutputMode};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let store_path = match args.path.as_deref() {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => ctx.store_path()?,
    };
    let config_path = match args.config_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };

    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
    }

    let existed = store_path.exists();
    let store = SqliteRecordStore::open(&store_path)?;
    let mut service = RecipeService::new(store);

    let seed_on_empty = ctx
        .config()?
        .map(|config| config.seed.on_empty)
        .unwrap_or(true);
    let seeded = if args.no_samples || !seed_on_empty {
        0
    } else {
        service.seed_samples_if_empty()?
    };
    let total = service.store().count()?;
    info!(path = %store_path.display(), existed, seeded, "store ready");

    let config_written = if needs_config(&config_path, &store_path)? {
        write_config(&config_path, &RecipeConfig::new(store_path.clone(), seed_on_empty))?;
        true
    } else {
        false
    };

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let title = if existed {
        "Recipe store already initialized"
    } else {
        "Initialized recipe store"
    };
    let store_display = store_path.display().to_string();
    let seeded_display = seeded.to_string();
    let total_display = total.to_string();
    let config_display = config_path.display().to_string();
    let mut items = vec![
        ("Path", store_display.as_str()),
        ("Recipes", total_display.as_str()),
        ("Samples Added", seeded_display.as_str()),
    ];
    if config_written {
        items.push(("Config", config_display.as_str()));
    }
    print(&ui_ctx, &receipt(&ui_ctx, title, &items));

    if matches!(ui_ctx.mode, OutputMode::Pretty) {
        print(&ui_ctx, &hint(&ui_ctx, "recipes random"));
    }
    Ok(())
}

/// Write the config when none exists or it points at a different store.
fn needs_config(config_path: &Path, store_path: &Path) -> anyhow::Result<bool> {
    if !config_path.exists() {
        return Ok(true);
    }
    let current = read_config(config_path)?;
    Ok(Path::new(&current.store.path) != store_path)
}
