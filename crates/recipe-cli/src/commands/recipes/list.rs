use recipe_core::tags::normalize_filter;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{print_recipe_list, recipes_json};
use crate::ui::{blank_line, header, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let filter = normalize_filter(args.tag.as_deref());
    let recipes = service.recipes_tagged(filter)?;

    let ui_ctx = ctx.ui_context(args.json, args.format);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&recipes_json(&recipes))?;
        println!("{}", output);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "list", filter));
        blank_line(&ui_ctx);
    }

    if recipes.is_empty() {
        if ui_ctx.mode.is_pretty() && !ctx.quiet() {
            print(&ui_ctx, "No recipes found.");
            print(&ui_ctx, &hint(&ui_ctx, "recipes add --title \"...\""));
        }
        return Ok(());
    }

    print_recipe_list(&ui_ctx, &recipes);
    Ok(())
}
