//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use recipe_core::RecipeError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (recipe, matching recipes)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Store file could not be opened, read or written
    Storage { message: String, hint: String },

    /// Anything else
    General(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. }
            | CliError::InvalidInput { message, .. }
            | CliError::Storage { message, .. }
            | CliError::General(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Map a core error to its CLI presentation.
    pub fn from_recipe_error(err: &RecipeError) -> Self {
        match err {
            RecipeError::Validation(message) => CliError::invalid_input_with_hint(
                message.clone(),
                "Hint: Provide a non-empty --title.",
            ),
            RecipeError::RecordNotFound(_) => CliError::not_found(
                err.to_string(),
                "Hint: Run `recipes list` to find recipe IDs.",
            ),
            RecipeError::NoMatchingRecipes { tag: Some(_) } => CliError::not_found(
                err.to_string(),
                "Hint: Run `recipes tags` to see the tags in use.",
            ),
            RecipeError::NoMatchingRecipes { tag: None } => CliError::not_found(
                err.to_string(),
                "Hint: Run `recipes add` or `recipes seed` to add recipes.",
            ),
            RecipeError::StorageInit(_) => CliError::Storage {
                message: err.to_string(),
                hint: "Hint: Check that --db points to a store created by `recipes init`."
                    .to_string(),
            },
            RecipeError::StorageWrite(_) | RecipeError::StorageRead(_) => CliError::Storage {
                message: err.to_string(),
                hint: "Hint: Check the store file permissions and free disk space, then retry."
                    .to_string(),
            },
        }
    }

    /// Classify an error bubbled up through `anyhow`.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            return cli_err.clone();
        }
        if let Some(recipe_err) = err.downcast_ref::<RecipeError>() {
            return Self::from_recipe_error(recipe_err);
        }
        CliError::General(format!("{:#}", err))
    }

    /// The hint line for this error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Storage { hint, .. } => {
                Some(hint.as_str())
            }
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::General(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Storage { .. } => exit_codes::STORAGE_FAILED,
            CliError::General(_) => exit_codes::GENERAL,
        }
    }
}
