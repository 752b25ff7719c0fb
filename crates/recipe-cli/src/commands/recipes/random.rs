use tracing::debug;

use crate::app::AppContext;
use crate::cli::RandomArgs;
use crate::output::{print_recipe, recipe_json};

pub fn handle_random(ctx: &AppContext, args: &RandomArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let recipe = service.random_recipe(args.tag.as_deref())?;
    debug!(id = recipe.id, "picked recipe");

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&recipe_json(&recipe))?;
        println!("{}", output);
    } else {
        print_recipe(&ui_ctx, &recipe, ctx.quiet());
    }
    Ok(())
}
