//! Error types for recipe core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

use crate::storage::RecipeId;

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Core error type for recipe operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Invalid input, e.g. an empty title
    #[error("Validation error: {0}")]
    Validation(String),

    /// No recipe with the requested ID
    #[error("Recipe {0} not found")]
    RecordNotFound(RecipeId),

    /// Random selection found no candidates
    #[error("{}", no_matching_message(.tag))]
    NoMatchingRecipes { tag: Option<String> },

    /// The backing file could not be opened or has an unexpected schema
    #[error("Storage initialization error: {0}")]
    StorageInit(String),

    /// A write did not complete
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// A read failed or returned undecodable data
    #[error("Storage read error: {0}")]
    StorageRead(String),
}

fn no_matching_message(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("No recipes tagged '{}'", tag),
        None => "No recipes stored".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_message_mentions_tag() {
        let err = RecipeError::NoMatchingRecipes {
            tag: Some("dessert".to_string()),
        };
        assert_eq!(err.to_string(), "No recipes tagged 'dessert'");

        let err = RecipeError::NoMatchingRecipes { tag: None };
        assert_eq!(err.to_string(), "No recipes stored");
    }
}
