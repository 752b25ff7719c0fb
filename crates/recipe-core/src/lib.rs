//! # Recipe Core
//!
//! Core library for Recipe Box - a personal recipe catalog that answers
//! "what should I cook?".
//!
//! This crate provides the recipe data model, durable storage and the
//! service layer independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: `RecordStore` trait and the SQLite implementation
//! - **service**: validation, random selection and activity statistics
//! - **tags**: comma-separated tag parsing and matching
//! - **sample**: bundled sample recipes for bootstrapping a new store

pub mod error;
pub mod sample;
pub mod service;
pub mod storage;
pub mod tags;

pub use error::{RecipeError, Result};
pub use service::{ActivityStats, RecipeService};
pub use storage::{NewRecipe, Recipe, RecipeId, RecipeUpdate, RecordStore, SqliteRecordStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default file name of the recipe store.
pub const DEFAULT_STORE_FILE: &str = "recipes.db";
