//! Sample recipes for bootstrapping an empty store.

use chrono::{DateTime, Utc};

use crate::storage::NewRecipe;

/// (title, tags, ingredients, steps)
const SAMPLES: [(&str, &str, &str, &str); 5] = [
    (
        "Oatmeal with berries",
        "breakfast,vegetarian",
        "Rolled oats\nMilk\nBerries\nSugar",
        "1. Bring the milk to a boil\n2. Stir in the oats\n3. Serve topped with berries",
    ),
    (
        "Caesar salad",
        "salad,meat",
        "Romaine lettuce\nCroutons\nChicken breast\nCaesar dressing",
        "1. Pan-fry the chicken\n2. Toss everything together\n3. Dress and serve",
    ),
    (
        "Pumpkin cream soup",
        "soup,vegetarian",
        "Pumpkin\nOnion\nStock\nCream",
        "1. Saute the onion\n2. Add pumpkin and stock\n3. Simmer until soft\n4. Blend with the cream",
    ),
    (
        "Chocolate muffins",
        "dessert,vegetarian",
        "Flour\nCocoa\nSugar\nEggs\nMilk",
        "1. Mix the dry ingredients\n2. Add eggs and milk\n3. Bake for 20 minutes",
    ),
    (
        "Pasta carbonara",
        "dinner,meat",
        "Spaghetti\nGuanciale or bacon\nCream\nParmesan\nEggs",
        "1. Cook the pasta\n2. Fry the guanciale\n3. Combine with the sauce off the heat",
    ),
];

/// The bundled sample recipes, all stamped with `created_at`.
pub fn sample_recipes(created_at: DateTime<Utc>) -> Vec<NewRecipe> {
    SAMPLES
        .iter()
        .map(|(title, tags, ingredients, steps)| {
            NewRecipe::new(*title, created_at)
                .with_tags(*tags)
                .with_ingredients(*ingredients)
                .with_steps(*steps)
        })
        .collect()
}
