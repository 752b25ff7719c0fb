//! Record store trait definition.
//!
//! The `RecordStore` trait defines the interface the service layer needs
//! from a backing store. Stores do no validation and read no clock; the
//! only query is a full scan.

use super::types::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
use crate::error::Result;

/// Durable CRUD over recipe records.
///
/// All implementations must ensure:
/// - IDs are assigned by the store, increase monotonically and are never reused
/// - Every mutating call is committed before it returns
/// - `created_at` is written once on insert and never changed
pub trait RecordStore {
    /// Create the schema if it does not exist yet.
    ///
    /// Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::StorageInit` if the backing file is not a valid
    /// store or has an unexpected schema.
    fn initialize(&mut self) -> Result<()>;

    /// Insert a new recipe.
    ///
    /// # Returns
    ///
    /// Returns the ID assigned to the new row.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::StorageWrite` if the row could not be committed.
    fn insert(&mut self, recipe: &NewRecipe) -> Result<RecipeId>;

    /// Get a recipe by ID.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecordNotFound` if no row has this ID.
    fn get(&self, id: RecipeId) -> Result<Recipe>;

    /// Apply a partial update to title, ingredients, steps and tags.
    ///
    /// Writing identical values, or an empty update, succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecordNotFound` if no row has this ID.
    fn update(&mut self, id: RecipeId, update: &RecipeUpdate) -> Result<()>;

    /// Delete a recipe.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecordNotFound` if no row has this ID, including
    /// a second delete of the same ID.
    fn delete(&mut self, id: RecipeId) -> Result<()>;

    /// List all recipes, ordered by ID ascending.
    fn list_all(&self) -> Result<Vec<Recipe>>;

    /// Number of stored recipes.
    fn count(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    /// Bulk insert, one `insert` per record.
    ///
    /// No duplicate suppression is performed.
    fn seed(&mut self, recipes: &[NewRecipe]) -> Result<Vec<RecipeId>> {
        recipes.iter().map(|recipe| self.insert(recipe)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn RecordStore) {}
    }
}
