use dialoguer::{theme::ColorfulTheme, Input};

use recipe_core::tags::join_tags;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = ui_ctx.is_interactive() && !args.no_input;

    let title = match args.title.as_deref() {
        Some(title) => title.to_string(),
        None if interactive => prompt(&ui_ctx, "Title", false)?,
        None => {
            return Err(CliError::invalid_input_with_hint(
                "A recipe title is required",
                "Hint: Pass --title \"...\" or run without --no-input.",
            )
            .into())
        }
    };
    let ingredients = match args.ingredients.as_deref() {
        Some(value) => value.to_string(),
        None if interactive && args.title.is_none() => prompt(&ui_ctx, "Ingredients", true)?,
        None => String::new(),
    };
    let steps = match args.steps.as_deref() {
        Some(value) => value.to_string(),
        None if interactive && args.title.is_none() => prompt(&ui_ctx, "Steps", true)?,
        None => String::new(),
    };
    let tags = join_tags(&args.tag);

    let mut service = ctx.open_service()?;
    let id = service.add_recipe(&title, &ingredients, &steps, &tags)?;

    if !ctx.quiet() {
        let id_display = id.to_string();
        let title_display = title.trim().to_string();
        let mut items = vec![("ID", id_display.as_str()), ("Title", title_display.as_str())];
        if !tags.is_empty() {
            items.push(("Tags", tags.as_str()));
        }
        print(&ui_ctx, &receipt(&ui_ctx, "Added recipe", &items));
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn prompt(ui_ctx: &UiContext, label: &str, allow_empty: bool) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let value: String = if ui_ctx.color {
        Input::with_theme(&theme)
            .with_prompt(label)
            .allow_empty(allow_empty)
            .interact_text()?
    } else {
        Input::new()
            .with_prompt(label)
            .allow_empty(allow_empty)
            .interact_text()?
    };
    Ok(value)
}
