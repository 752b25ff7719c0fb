use crate::app::AppContext;
use crate::cli::TagsArgs;
use crate::output::print_tags;

pub fn handle_tags(ctx: &AppContext, args: &TagsArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let tags = service.tags()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        print_tags(&ui_ctx, &tags);
    }
    Ok(())
}
