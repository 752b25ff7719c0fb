use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;

use recipe_core::storage::{NewRecipe, RecipeId, RecipeUpdate, RecordStore, SqliteRecordStore};
use recipe_core::{RecipeError, RecipeService};

fn service() -> RecipeService<SqliteRecordStore> {
    RecipeService::new(SqliteRecordStore::open_in_memory().expect("in-memory store"))
}

#[test]
fn test_add_then_get_round_trip() {
    let mut service = service();
    let before = Utc::now() - Duration::seconds(1);

    let id = service
        .add_recipe(
            "Pumpkin cream soup",
            "Pumpkin\nOnion",
            "1. Simmer\n2. Blend",
            "soup,vegetarian",
        )
        .unwrap();
    let after = Utc::now() + Duration::seconds(1);

    let recipe = service.get_recipe(id).unwrap();
    assert_eq!(recipe.id, id);
    assert_eq!(recipe.title, "Pumpkin cream soup");
    assert_eq!(recipe.ingredients, "Pumpkin\nOnion");
    assert_eq!(recipe.steps, "1. Simmer\n2. Blend");
    assert_eq!(recipe.tags, "soup,vegetarian");
    assert!(recipe.created_at >= before && recipe.created_at <= after);
}

#[test]
fn test_empty_titles_are_rejected_and_not_persisted() {
    let mut service = service();

    for title in ["", "   "] {
        let err = service.add_recipe(title, "x", "y", "z").unwrap_err();
        assert!(matches!(err, RecipeError::Validation(_)));
    }

    assert!(service.list_recipes().unwrap().is_empty());
}

#[test]
fn test_seed_with_blank_title_writes_nothing() {
    let mut service = service();
    let created_at = Utc::now();

    let err = service
        .seed(&[
            NewRecipe::new("Oatmeal", created_at),
            NewRecipe::new("   ", created_at),
        ])
        .unwrap_err();

    assert!(matches!(err, RecipeError::Validation(_)));
    assert!(service.list_recipes().unwrap().is_empty());
}

#[test]
fn test_seed_trims_titles() {
    let mut service = service();
    let ids = service
        .seed(&[NewRecipe::new("  Muffins  ", Utc::now())])
        .unwrap();

    assert_eq!(service.get_recipe(ids[0]).unwrap().title, "Muffins");
}

#[test]
fn test_edit_never_changes_identity_or_creation_time() {
    let mut service = service();
    let id = service.add_recipe("Toast", "Bread", "Toast it", "breakfast").unwrap();
    let original = service.get_recipe(id).unwrap();

    let updates = [
        RecipeUpdate::new().title("French toast"),
        RecipeUpdate::new().ingredients("Bread\nEgg\nMilk"),
        RecipeUpdate::new().steps("Soak\nFry"),
        RecipeUpdate::new().tags("breakfast,sweet"),
        RecipeUpdate::new()
            .title("Eggy bread")
            .ingredients("Bread\nEgg")
            .steps("Fry")
            .tags(""),
        RecipeUpdate::new(),
    ];

    for update in updates {
        service.edit_recipe(id, update).unwrap();
        let current = service.get_recipe(id).unwrap();
        assert_eq!(current.id, original.id);
        assert_eq!(current.created_at, original.created_at);
    }

    let last = service.get_recipe(id).unwrap();
    assert_eq!(last.title, "Eggy bread");
    assert_eq!(last.tags, "");
}

#[test]
fn test_edit_missing_recipe_is_not_found() {
    let mut service = service();
    let err = service
        .edit_recipe(99, RecipeUpdate::new().title("Ghost"))
        .unwrap_err();
    assert!(matches!(err, RecipeError::RecordNotFound(99)));
}

#[test]
fn test_delete_then_get_and_second_delete_fail() {
    let mut service = service();
    let id = service.add_recipe("Steak", "", "", "meat").unwrap();

    service.delete_recipe(id).unwrap();

    assert!(matches!(
        service.get_recipe(id),
        Err(RecipeError::RecordNotFound(missing)) if missing == id
    ));
    assert!(matches!(
        service.delete_recipe(id),
        Err(RecipeError::RecordNotFound(missing)) if missing == id
    ));
}

#[test]
fn test_random_without_filter_returns_listed_recipe() {
    let mut service = service();
    service.seed_samples().unwrap();
    let listed: HashSet<RecipeId> = service
        .list_recipes()
        .unwrap()
        .into_iter()
        .map(|recipe| recipe.id)
        .collect();

    for _ in 0..25 {
        let picked = service.random_recipe(None).unwrap();
        assert!(listed.contains(&picked.id));
    }
}

#[test]
fn test_random_on_empty_store_has_no_match() {
    let service = service();
    let err = service.random_recipe(None).unwrap_err();
    assert!(matches!(err, RecipeError::NoMatchingRecipes { tag: None }));
}

#[test]
fn test_random_filter_only_returns_tagged_recipes() {
    let mut service = service();
    let dessert = service
        .add_recipe("Chocolate muffins", "", "", "dessert,vegetarian")
        .unwrap();
    let salad = service.add_recipe("Caesar salad", "", "", "salad,meat").unwrap();

    for _ in 0..50 {
        let picked = service.random_recipe(Some("dessert")).unwrap();
        assert_eq!(picked.id, dessert);
        assert_ne!(picked.id, salad);
    }
}

#[test]
fn test_activity_stats_counts_per_day() {
    let mut service = service();
    let day_one = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let day_two = Utc.with_ymd_and_hms(2024, 1, 2, 18, 30, 0).unwrap();
    service
        .seed(&[
            NewRecipe::new("Porridge", day_one),
            NewRecipe::new("Pancakes", day_one + Duration::hours(3)),
            NewRecipe::new("Risotto", day_two),
        ])
        .unwrap();

    let stats = service.activity_stats().unwrap();
    let expected: Vec<(String, usize)> = vec![
        ("2024-01-01".to_string(), 2),
        ("2024-01-02".to_string(), 1),
    ];
    assert_eq!(stats.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_activity_stats_empty_store() {
    let service = service();
    assert!(service.activity_stats().unwrap().is_empty());
}

#[test]
fn test_seeded_vegetarian_picks_stay_in_tagged_set() {
    let mut service = service();
    let created_at = Utc::now();
    let ids = service
        .seed(&[
            NewRecipe::new("Oatmeal", created_at).with_tags("breakfast,vegetarian"),
            NewRecipe::new("Caesar salad", created_at).with_tags("salad,meat"),
            NewRecipe::new("Pumpkin soup", created_at).with_tags("soup,vegetarian"),
            NewRecipe::new("Muffins", created_at).with_tags("dessert,vegetarian"),
            NewRecipe::new("Carbonara", created_at).with_tags("dinner,meat"),
        ])
        .unwrap();
    let vegetarian: HashSet<RecipeId> = [ids[0], ids[2], ids[3]].into_iter().collect();

    for _ in 0..50 {
        let picked = service.random_recipe(Some("vegetarian")).unwrap();
        assert!(vegetarian.contains(&picked.id));
    }
}

#[test]
fn test_service_over_file_store_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.db");

    let id = {
        let mut service = RecipeService::new(SqliteRecordStore::open(&path).unwrap());
        service.add_recipe("Carbonara", "Pasta", "Cook", "dinner").unwrap()
    };

    let service = RecipeService::new(SqliteRecordStore::open(&path).unwrap());
    assert_eq!(service.get_recipe(id).unwrap().title, "Carbonara");
    assert_eq!(service.store().count().unwrap(), 1);
}

#[test]
fn test_returned_recipes_are_snapshots() {
    let mut service = service();
    let id = service.add_recipe("Soup", "", "", "").unwrap();

    let mut copy = service.get_recipe(id).unwrap();
    copy.title = "Changed locally".to_string();

    assert_eq!(service.get_recipe(id).unwrap().title, "Soup");
}
