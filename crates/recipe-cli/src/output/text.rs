//! Text and table output formatting for recipes.

use recipe_core::{ActivityStats, Recipe};

use crate::constants::STATS_BAR_WIDTH;
use crate::ui::theme::{styled, styles};
use crate::ui::{
    bar_chart, blank_line, format_datetime, kv, print, simple_table, single_line, truncate,
};
use crate::ui::{OutputMode, UiContext};

const TITLE_MAX: usize = 48;
const TAGS_MAX: usize = 32;

/// Print a full recipe.
///
/// With `quiet` only the title and body sections are printed.
pub fn print_recipe(ctx: &UiContext, recipe: &Recipe, quiet: bool) {
    let pretty = ctx.mode.is_pretty();

    if pretty {
        print(ctx, &styled(&recipe.title, styles::title(), ctx.color));
    } else {
        print(ctx, &kv(ctx, "Title", &single_line(&recipe.title)));
    }

    if !quiet {
        print(ctx, &kv(ctx, "ID", &recipe.id.to_string()));
        print(
            ctx,
            &kv(ctx, "Created", &format_datetime(&recipe.created_at, pretty)),
        );
        let tags = recipe.tag_list();
        if !tags.is_empty() {
            print(ctx, &kv(ctx, "Tags", &tags.join(", ")));
        }
    }

    print_section(ctx, "Ingredients", &recipe.ingredients);
    print_section(ctx, "Steps", &recipe.steps);
}

fn print_section(ctx: &UiContext, label: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    match ctx.mode {
        OutputMode::Pretty => {
            blank_line(ctx);
            print(ctx, &styled(label, styles::bold(), ctx.color));
            for line in body.lines() {
                print(ctx, &format!("  {}", line));
            }
        }
        OutputMode::Plain => print(ctx, &kv(ctx, label, &single_line(body))),
        OutputMode::Json => {}
    }
}

/// Print recipes as a table, one row per recipe.
pub fn print_recipe_list(ctx: &UiContext, recipes: &[Recipe]) {
    let rows: Vec<Vec<String>> = recipes
        .iter()
        .map(|recipe| {
            let title = single_line(&recipe.title);
            let tags = recipe.tag_list().join(", ");
            if ctx.mode.is_pretty() {
                vec![
                    recipe.id.to_string(),
                    truncate(&title, TITLE_MAX),
                    truncate(&tags, TAGS_MAX),
                    recipe.created_at.format("%Y-%m-%d").to_string(),
                ]
            } else {
                vec![
                    recipe.id.to_string(),
                    title,
                    tags,
                    recipe.created_at.to_rfc3339(),
                ]
            }
        })
        .collect();

    print(
        ctx,
        &simple_table(ctx, &["ID", "Title", "Tags", "Added"], &rows),
    );
}

/// Print the per-day activity chart.
pub fn print_stats(ctx: &UiContext, stats: &ActivityStats) {
    let items: Vec<(String, usize)> = stats
        .iter()
        .map(|(date, count)| (date.clone(), *count))
        .collect();
    print(ctx, &bar_chart(ctx, &items, STATS_BAR_WIDTH));
}

/// Print tags one per line.
pub fn print_tags(ctx: &UiContext, tags: &[String]) {
    for tag in tags {
        print(ctx, tag);
    }
}
