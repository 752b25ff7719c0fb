use recipe_core::RecipeUpdate;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut update = RecipeUpdate::new();
    if let Some(title) = args.title.as_deref() {
        update = update.title(title);
    }
    if let Some(ingredients) = args.ingredients.as_deref() {
        update = update.ingredients(ingredients);
    }
    if let Some(steps) = args.steps.as_deref() {
        update = update.steps(steps);
    }
    if let Some(tags) = args.tags.as_deref() {
        update = update.tags(tags);
    }

    if update.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "Nothing to edit",
            "Hint: Pass at least one of --title, --ingredients, --steps or --tags.",
        )
        .into());
    }

    let mut service = ctx.open_service()?;
    service.edit_recipe(args.id, update)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let id_display = args.id.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Updated recipe", &[("ID", id_display.as_str())]),
        );
    }
    Ok(())
}
