//! SQLite storage backend.
//!
//! One file, one `recipes` table keyed by an autoincrement integer, plus a
//! small `meta` key/value table. Every write runs in autocommit mode or in an
//! explicit transaction that is committed before the call returns.

mod row;

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{RecipeError, Result};
use crate::storage::traits::RecordStore;
use crate::storage::types::{NewRecipe, Recipe, RecipeId, RecipeUpdate, StoreMetadata};

pub use row::{format_timestamp, parse_timestamp};
use row::{RecipeRow, RECIPE_COLUMNS};

/// Current on-disk format version, recorded in the `meta` table.
pub const FORMAT_VERSION: &str = "1";

const REQUIRED_COLUMNS: [&str; 6] = ["id", "title", "ingredients", "steps", "tags", "created_at"];

/// SQLite-backed recipe store.
pub struct SqliteRecordStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteRecordStore {
    fn init_error(err: rusqlite::Error) -> RecipeError {
        RecipeError::StorageInit(format!("SQLite error: {}", err))
    }

    fn read_error(err: rusqlite::Error) -> RecipeError {
        RecipeError::StorageRead(format!("SQLite error: {}", err))
    }

    fn write_error(err: rusqlite::Error) -> RecipeError {
        RecipeError::StorageWrite(format!("SQLite error: {}", err))
    }

    /// Open (or create) the store file at `path` and initialize its schema.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::StorageInit` if the file cannot be opened, is not
    /// a SQLite database, or holds a `recipes` table with missing columns.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(Self::init_error)?;
        let mut store = Self {
            path: Some(path.to_path_buf()),
            conn,
        };
        store.initialize()?;
        debug!(path = %path.display(), "opened recipe store");
        Ok(store)
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Self::init_error)?;
        let mut store = Self { path: None, conn };
        store.initialize()?;
        Ok(store)
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get store metadata.
    pub fn metadata(&self) -> Result<StoreMetadata> {
        let format_version: String = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .map_err(Self::read_error)?;

        let created_at_str: String = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'created_at'",
                [],
                |row| row.get(0),
            )
            .map_err(Self::read_error)?;

        Ok(StoreMetadata {
            format_version,
            created_at: parse_timestamp(&created_at_str)?,
        })
    }

    /// `(name, not_null)` for each column of the `recipes` table; empty if
    /// the table does not exist.
    fn recipe_columns(conn: &Connection) -> rusqlite::Result<Vec<(String, bool)>> {
        let mut stmt = conn.prepare("PRAGMA table_info(recipes)")?;
        let columns = stmt
            .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, bool>(3)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(columns)
    }

    /// Whether the `recipes` table was declared with `AUTOINCREMENT`.
    fn has_autoincrement(conn: &Connection) -> rusqlite::Result<bool> {
        let sql: Option<String> = conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'recipes'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(sql.is_some_and(|sql| sql.to_ascii_uppercase().contains("AUTOINCREMENT")))
    }

    fn insert_with(conn: &Connection, recipe: &NewRecipe) -> Result<RecipeId> {
        conn.execute(
            r#"
            INSERT INTO recipes (title, ingredients, steps, tags, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            (
                &recipe.title,
                &recipe.ingredients,
                &recipe.steps,
                &recipe.tags,
                format_timestamp(&recipe.created_at),
            ),
        )
        .map_err(Self::write_error)?;

        Ok(conn.last_insert_rowid())
    }
}

impl RecordStore for SqliteRecordStore {
    fn initialize(&mut self) -> Result<()> {
        let tx = self.conn.transaction().map_err(Self::init_error)?;

        let columns = Self::recipe_columns(&tx).map_err(Self::init_error)?;
        let mut rebuild = false;
        if !columns.is_empty() {
            let missing: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|required| !columns.iter().any(|(column, _)| column == required))
                .collect();
            if !missing.is_empty() {
                return Err(RecipeError::StorageInit(format!(
                    "recipes table is missing columns: {}",
                    missing.join(", ")
                )));
            }

            // Without AUTOINCREMENT SQLite hands out max(id) + 1, reusing the
            // id of a deleted last row. Nullable text columns are tightened in
            // the same pass.
            let nullable = columns.iter().any(|(name, not_null)| {
                name != "id" && REQUIRED_COLUMNS.contains(&name.as_str()) && !not_null
            });
            rebuild = nullable || !Self::has_autoincrement(&tx).map_err(Self::init_error)?;
            if rebuild {
                info!("rebuilding legacy recipes table");
                tx.execute("ALTER TABLE recipes RENAME TO recipes_legacy", [])
                    .map_err(Self::init_error)?;
            }
        } else {
            info!("creating recipe schema");
        }

        tx.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                ingredients TEXT NOT NULL DEFAULT '',
                steps TEXT NOT NULL DEFAULT '',
                tags TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .map_err(Self::init_error)?;

        if rebuild {
            // A legacy row without a title or created_at fails the NOT NULL
            // constraints and rolls the whole transaction back.
            tx.execute_batch(
                r#"
                INSERT INTO recipes (id, title, ingredients, steps, tags, created_at)
                SELECT id, title, COALESCE(ingredients, ''), COALESCE(steps, ''),
                       COALESCE(tags, ''), created_at
                FROM recipes_legacy;

                DROP TABLE recipes_legacy;
                "#,
            )
            .map_err(Self::init_error)?;
        }

        let now = format_timestamp(&Utc::now());
        tx.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?)",
            [FORMAT_VERSION],
        )
        .map_err(Self::init_error)?;
        tx.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('created_at', ?)",
            [now],
        )
        .map_err(Self::init_error)?;

        tx.commit().map_err(Self::init_error)?;
        Ok(())
    }

    fn insert(&mut self, recipe: &NewRecipe) -> Result<RecipeId> {
        let id = Self::insert_with(&self.conn, recipe)?;
        debug!(id, "inserted recipe");
        Ok(id)
    }

    fn get(&self, id: RecipeId) -> Result<Recipe> {
        let query = format!("SELECT {} FROM recipes WHERE id = ?", RECIPE_COLUMNS);
        let row = self
            .conn
            .query_row(&query, [id], RecipeRow::from_row)
            .optional()
            .map_err(Self::read_error)?;

        match row {
            Some(row) => Recipe::try_from(row),
            None => Err(RecipeError::RecordNotFound(id)),
        }
    }

    fn update(&mut self, id: RecipeId, update: &RecipeUpdate) -> Result<()> {
        let tx = self.conn.transaction().map_err(Self::write_error)?;

        let exists: Option<RecipeId> = tx
            .query_row("SELECT id FROM recipes WHERE id = ?", [id], |row| row.get(0))
            .optional()
            .map_err(Self::read_error)?;
        if exists.is_none() {
            return Err(RecipeError::RecordNotFound(id));
        }

        if !update.is_empty() {
            tx.execute(
                r#"
                UPDATE recipes SET
                    title = COALESCE(?1, title),
                    ingredients = COALESCE(?2, ingredients),
                    steps = COALESCE(?3, steps),
                    tags = COALESCE(?4, tags)
                WHERE id = ?5
                "#,
                (
                    update.title.as_deref(),
                    update.ingredients.as_deref(),
                    update.steps.as_deref(),
                    update.tags.as_deref(),
                    id,
                ),
            )
            .map_err(Self::write_error)?;
        }

        tx.commit().map_err(Self::write_error)?;
        debug!(id, "updated recipe");
        Ok(())
    }

    fn delete(&mut self, id: RecipeId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?", [id])
            .map_err(Self::write_error)?;
        if changed == 0 {
            return Err(RecipeError::RecordNotFound(id));
        }
        debug!(id, "deleted recipe");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Recipe>> {
        let query = format!("SELECT {} FROM recipes ORDER BY id ASC", RECIPE_COLUMNS);
        let mut stmt = self.conn.prepare(&query).map_err(Self::read_error)?;
        let rows = stmt
            .query_map([], RecipeRow::from_row)
            .map_err(Self::read_error)?;

        let mut recipes = Vec::new();
        for row in rows {
            let row = row.map_err(Self::read_error)?;
            recipes.push(Recipe::try_from(row)?);
        }

        Ok(recipes)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .map_err(Self::read_error)?;
        usize::try_from(count)
            .map_err(|_| RecipeError::StorageRead(format!("Invalid recipe count: {}", count)))
    }

    fn seed(&mut self, recipes: &[NewRecipe]) -> Result<Vec<RecipeId>> {
        let tx = self.conn.transaction().map_err(Self::write_error)?;

        let mut ids = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            ids.push(Self::insert_with(&tx, recipe)?);
        }

        tx.commit().map_err(Self::write_error)?;
        debug!(count = ids.len(), "seeded recipes");
        Ok(ids)
    }
}
