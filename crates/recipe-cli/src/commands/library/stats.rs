use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};
use crate::ui::{blank_line, header, kv, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let stats = service.activity_stats()?;

    let ui_ctx = ctx.ui_context(args.json, args.format);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&stats_json(&stats))?;
        println!("{}", output);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let total: usize = stats.values().sum();
        print(&ui_ctx, &header(&ui_ctx, "stats", None));
        print(&ui_ctx, &kv(&ui_ctx, "Recipes", &total.to_string()));
        print(&ui_ctx, &kv(&ui_ctx, "Days", &stats.len().to_string()));
        blank_line(&ui_ctx);
    }

    if stats.is_empty() {
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, "No recipes yet.");
        }
        return Ok(());
    }

    print_stats(&ui_ctx, &stats);
    Ok(())
}
