use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    let recipe = service.get_recipe(args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Hint: Pass --yes to delete non-interactively.",
            )
            .into());
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete recipe {} '{}'?", recipe.id, recipe.title))
            .default(false)
            .interact()?;

        if !confirmed {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    service.delete_recipe(recipe.id)?;

    if !ctx.quiet() {
        let id_display = recipe.id.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Deleted recipe",
                &[("ID", id_display.as_str()), ("Title", recipe.title.as_str())],
            ),
        );
    }
    Ok(())
}
