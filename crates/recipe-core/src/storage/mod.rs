//! Storage layer for recipe records.
//!
//! The `RecordStore` trait is the seam between the service layer and the
//! backing file; `SqliteRecordStore` is the single-file implementation.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteRecordStore;
pub use traits::RecordStore;
pub use types::{NewRecipe, Recipe, RecipeId, RecipeUpdate, StoreMetadata};
