//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags;

/// Store-assigned recipe identifier.
pub type RecipeId = i64;

/// Metadata for a recipe store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "1")
    pub format_version: String,

    /// When this store file was first initialized
    pub created_at: DateTime<Utc>,
}

/// A persisted recipe.
///
/// Values returned by the store are snapshots; changing one has no effect
/// on storage until it is written back through `RecordStore::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier, assigned on insert and never reused
    pub id: RecipeId,

    /// Display title (never empty)
    pub title: String,

    /// Free-form ingredient list, usually one per line
    pub ingredients: String,

    /// Free-form preparation steps
    pub steps: String,

    /// Comma-separated tags, stored verbatim
    pub tags: String,

    /// When this recipe was first stored
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Individual tags, trimmed, with empty elements skipped.
    pub fn tag_list(&self) -> Vec<&str> {
        tags::split_tags(&self.tags)
    }

    /// Whether any tag equals `tag` under the case-insensitive matching policy.
    pub fn has_tag(&self, tag: &str) -> bool {
        tags::contains_tag(&self.tags, tag)
    }
}

/// Builder for creating new recipes.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,

    /// Creation timestamp written verbatim by the store
    pub created_at: DateTime<Utc>,
}

impl NewRecipe {
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            ingredients: String::new(),
            steps: String::new(),
            tags: String::new(),
            created_at,
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

/// Partial update of a recipe's editable fields.
///
/// `None` leaves the stored value untouched. `id` and `created_at` are not
/// editable and have no counterpart here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub tags: Option<String>,
}

impl RecipeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = Some(steps.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_none()
            && self.steps.is_none()
            && self.tags.is_none()
    }
}
