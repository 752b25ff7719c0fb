//! JSON output formatting for recipes.

use recipe_core::{ActivityStats, Recipe};

/// Convert a recipe to JSON for output.
pub fn recipe_json(recipe: &Recipe) -> serde_json::Value {
    serde_json::json!({
        "id": recipe.id,
        "title": recipe.title,
        "ingredients": recipe.ingredients,
        "steps": recipe.steps,
        "tags": recipe.tag_list(),
        "created_at": recipe.created_at,
    })
}

/// Convert multiple recipes to a JSON array for output.
pub fn recipes_json(recipes: &[Recipe]) -> Vec<serde_json::Value> {
    recipes.iter().map(recipe_json).collect()
}

/// Convert day counts to a JSON array of `{date, count}` objects, oldest first.
pub fn stats_json(stats: &ActivityStats) -> Vec<serde_json::Value> {
    stats
        .iter()
        .map(|(date, count)| serde_json::json!({ "date": date, "count": count }))
        .collect()
}
