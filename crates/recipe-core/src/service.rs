//! Recipe service: the API the presentation layer talks to.
//!
//! Wraps a `RecordStore` with input validation, the identity/timestamp
//! policy, tag-filtered random selection and per-day activity counts. It
//! never formats user-facing text; every failure is a `RecipeError`.

use std::collections::BTreeMap;

use chrono::{SubsecRound, Utc};
use rand::Rng;
use tracing::debug;

use crate::error::{RecipeError, Result};
use crate::sample::sample_recipes;
use crate::storage::{NewRecipe, Recipe, RecipeId, RecipeUpdate, RecordStore};
use crate::tags;

/// Recipes added per calendar day (UTC), keyed by `YYYY-MM-DD`.
///
/// Days without recipes are absent. Iteration order is chronological.
pub type ActivityStats = BTreeMap<String, usize>;

/// Service layer over a record store.
pub struct RecipeService<S> {
    store: S,
}

impl<S: RecordStore> RecipeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn validate_title(title: &str) -> Result<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(RecipeError::Validation(
                "Recipe title must not be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    /// Add a recipe stamped with the current time.
    ///
    /// The title is trimmed; the other fields are stored as given.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Validation` if the trimmed title is empty.
    pub fn add_recipe(
        &mut self,
        title: &str,
        ingredients: &str,
        steps: &str,
        tags: &str,
    ) -> Result<RecipeId> {
        let title = Self::validate_title(title)?;
        let created_at = Utc::now().trunc_subsecs(0);
        let recipe = NewRecipe::new(title, created_at)
            .with_ingredients(ingredients)
            .with_steps(steps)
            .with_tags(tags);

        let id = self.store.insert(&recipe)?;
        debug!(id, "added recipe");
        Ok(id)
    }

    /// Edit the title, ingredients, steps or tags of a recipe.
    ///
    /// `id` and `created_at` are never touched.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Validation` if a title is given and is empty
    /// after trimming, `RecipeError::RecordNotFound` if the recipe is gone.
    pub fn edit_recipe(&mut self, id: RecipeId, mut update: RecipeUpdate) -> Result<()> {
        if let Some(title) = update.title.as_deref() {
            update.title = Some(Self::validate_title(title)?);
        }
        self.store.update(id, &update)
    }

    pub fn delete_recipe(&mut self, id: RecipeId) -> Result<()> {
        self.store.delete(id)
    }

    pub fn get_recipe(&self, id: RecipeId) -> Result<Recipe> {
        self.store.get(id)
    }

    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.store.list_all()
    }

    /// Recipes carrying `tag`, or all recipes when the filter is `None` or blank.
    pub fn recipes_tagged(&self, tag: Option<&str>) -> Result<Vec<Recipe>> {
        let mut recipes = self.store.list_all()?;
        if let Some(tag) = tags::normalize_filter(tag) {
            recipes.retain(|recipe| recipe.has_tag(tag));
        }
        Ok(recipes)
    }

    /// Pick one recipe uniformly at random, optionally restricted to a tag.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NoMatchingRecipes` if no recipe qualifies.
    pub fn random_recipe(&self, tag_filter: Option<&str>) -> Result<Recipe> {
        self.random_recipe_with(tag_filter, &mut rand::thread_rng())
    }

    /// `random_recipe` with a caller-supplied random source.
    pub fn random_recipe_with<R: Rng + ?Sized>(
        &self,
        tag_filter: Option<&str>,
        rng: &mut R,
    ) -> Result<Recipe> {
        let mut candidates = self.recipes_tagged(tag_filter)?;
        if candidates.is_empty() {
            return Err(RecipeError::NoMatchingRecipes {
                tag: tags::normalize_filter(tag_filter).map(str::to_string),
            });
        }

        let index = rng.gen_range(0..candidates.len());
        debug!(candidates = candidates.len(), index, "picked random recipe");
        Ok(candidates.swap_remove(index))
    }

    /// Count recipes per UTC calendar day of `created_at`.
    pub fn activity_stats(&self) -> Result<ActivityStats> {
        let mut stats = ActivityStats::new();
        for recipe in self.store.list_all()? {
            let day = recipe.created_at.date_naive().format("%Y-%m-%d").to_string();
            *stats.entry(day).or_insert(0) += 1;
        }
        Ok(stats)
    }

    /// Distinct tags across all recipes, lowercased and sorted.
    pub fn tags(&self) -> Result<Vec<String>> {
        let recipes = self.store.list_all()?;
        Ok(tags::distinct_tags(
            recipes.iter().map(|recipe| recipe.tags.as_str()),
        ))
    }

    /// Bulk insert through the store's insert path.
    ///
    /// Titles are validated and trimmed like `add_recipe`; nothing is written
    /// unless every title is valid.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Validation` if any title is empty after trimming.
    pub fn seed(&mut self, recipes: &[NewRecipe]) -> Result<Vec<RecipeId>> {
        let checked = recipes
            .iter()
            .map(|recipe| {
                let mut recipe = recipe.clone();
                recipe.title = Self::validate_title(&recipe.title)?;
                Ok(recipe)
            })
            .collect::<Result<Vec<_>>>()?;
        self.store.seed(&checked)
    }

    /// Insert the bundled sample recipes.
    pub fn seed_samples(&mut self) -> Result<Vec<RecipeId>> {
        let samples = sample_recipes(Utc::now().trunc_subsecs(0));
        self.seed(&samples)
    }

    /// Insert the sample recipes only when the store is empty.
    ///
    /// Returns how many recipes were added.
    pub fn seed_samples_if_empty(&mut self) -> Result<usize> {
        if self.store.count()? > 0 {
            return Ok(0);
        }
        Ok(self.seed_samples()?.len())
    }
}
