use std::fs;

use chrono::{TimeZone, Utc};
use rusqlite::Connection;
use tempfile::tempdir;

use recipe_core::storage::{NewRecipe, RecipeUpdate, RecordStore, SqliteRecordStore};
use recipe_core::RecipeError;

fn sample(title: &str) -> NewRecipe {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    NewRecipe::new(title, created_at)
        .with_ingredients("Eggs")
        .with_steps("Whisk")
        .with_tags("breakfast")
}

#[test]
fn test_open_creates_file_and_schema() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");

    let store = SqliteRecordStore::open(&path).expect("open should succeed");
    assert!(path.exists());
    assert_eq!(store.path(), Some(path.as_path()));
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_writes_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");

    let (kept, removed) = {
        let mut store = SqliteRecordStore::open(&path).unwrap();
        let kept = store.insert(&sample("Omelette")).unwrap();
        let removed = store.insert(&sample("Toast")).unwrap();
        store
            .update(kept, &RecipeUpdate::new().steps("Whisk\nFry"))
            .unwrap();
        store.delete(removed).unwrap();
        (kept, removed)
    };

    let store = SqliteRecordStore::open(&path).unwrap();
    let recipe = store.get(kept).unwrap();
    assert_eq!(recipe.title, "Omelette");
    assert_eq!(recipe.steps, "Whisk\nFry");
    assert!(matches!(
        store.get(removed),
        Err(RecipeError::RecordNotFound(id)) if id == removed
    ));
}

#[test]
fn test_ids_keep_increasing_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");

    let last = {
        let mut store = SqliteRecordStore::open(&path).unwrap();
        store.insert(&sample("One")).unwrap();
        let last = store.insert(&sample("Two")).unwrap();
        store.delete(last).unwrap();
        last
    };

    let mut store = SqliteRecordStore::open(&path).unwrap();
    let next = store.insert(&sample("Three")).unwrap();
    assert!(next > last);
}

#[test]
fn test_open_rejects_non_database_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    fs::write(&path, "not a sqlite database\n".repeat(64)).unwrap();

    let err = SqliteRecordStore::open(&path)
        .err()
        .expect("open should fail");
    assert!(matches!(err, RecipeError::StorageInit(_)));
}

#[test]
fn test_open_rejects_unexpected_schema() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE recipes (id INTEGER PRIMARY KEY, name TEXT);")
            .unwrap();
    }

    let err = SqliteRecordStore::open(&path)
        .err()
        .expect("open should fail");
    match err {
        RecipeError::StorageInit(message) => assert!(message.contains("title")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_open_accepts_legacy_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                ingredients TEXT,
                steps TEXT,
                tags TEXT,
                created_at TEXT
            );
            INSERT INTO recipes (title, ingredients, steps, tags, created_at)
            VALUES ('Caesar salad', 'Lettuce', 'Toss', 'salad,meat', '2024-02-03T10:11:12.131415');
            "#,
        )
        .unwrap();
    }

    let store = SqliteRecordStore::open(&path).unwrap();
    let recipes = store.list_all().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].tags, "salad,meat");
    assert_eq!(recipes[0].created_at.date_naive().to_string(), "2024-02-03");
}

fn table_sql(path: &std::path::Path) -> String {
    let conn = Connection::open(path).unwrap();
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'recipes'",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn test_open_upgrades_legacy_table_without_autoincrement() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE recipes (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                steps TEXT NOT NULL,
                tags TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            INSERT INTO recipes (title, ingredients, steps, tags, created_at)
            VALUES ('Pancakes', 'Flour', 'Fry', 'breakfast', '2024-01-01T08:00:00Z'),
                   ('Waffles', 'Flour', 'Press', 'breakfast', '2024-01-02T08:00:00Z');
            "#,
        )
        .unwrap();
    }

    let mut store = SqliteRecordStore::open(&path).unwrap();
    let recipes = store.list_all().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Pancakes");
    assert_eq!(recipes[1].title, "Waffles");

    let last = recipes[1].id;
    store.delete(last).unwrap();
    let next = store.insert(&sample("Crepes")).unwrap();
    assert!(next > last, "id {next} reused after deleting {last}");

    drop(store);
    assert!(table_sql(&path).to_uppercase().contains("AUTOINCREMENT"));
}

#[test]
fn test_open_rejects_legacy_rows_without_title() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE recipes (
                id INTEGER PRIMARY KEY,
                title TEXT,
                ingredients TEXT,
                steps TEXT,
                tags TEXT,
                created_at TEXT
            );
            INSERT INTO recipes (title, created_at) VALUES (NULL, '2024-01-01T08:00:00Z');
            "#,
        )
        .unwrap();
    }

    let err = SqliteRecordStore::open(&path)
        .err()
        .expect("open should fail");
    assert!(matches!(err, RecipeError::StorageInit(_)));

    // The failed upgrade leaves the file as it was.
    let sql = table_sql(&path);
    assert!(!sql.to_uppercase().contains("AUTOINCREMENT"));
    let conn = Connection::open(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
