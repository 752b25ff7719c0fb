//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying recipes
//! in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{recipe_json, recipes_json, stats_json};
pub use text::{print_recipe, print_recipe_list, print_stats, print_tags};
