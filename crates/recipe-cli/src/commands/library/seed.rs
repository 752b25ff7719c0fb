use recipe_core::RecordStore;

use crate::app::AppContext;
use crate::cli::SeedArgs;
use crate::ui::{print, receipt};

pub fn handle_seed(ctx: &AppContext, args: &SeedArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;

    let added = if args.if_empty {
        service.seed_samples_if_empty()?
    } else {
        service.seed_samples()?.len()
    };

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let added_display = added.to_string();
        let total_display = service.store().count()?.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Seeded sample recipes",
                &[
                    ("Added", added_display.as_str()),
                    ("Recipes", total_display.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
