// ABOUTME: Built-in starter catalog of recipes and seasonal recipes
// ABOUTME: Loaded by the seed-recipes binary; existing ids are skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Recipe Catalog Seeding
//!
//! ```bash
//! cargo run --bin seed-recipes
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/larder.db
//! ```
//!
//! Meal types and diet tags are stored lowercase; cuisines are capitalized.

use super::RecipeManager;
use larder_core::errors::{AppResult, ErrorCode};
use larder_core::models::{Recipe, SeasonalRecipe};
use serde_json::json;
use tracing::{debug, info};

/// Static recipe definition
struct CatalogRecipe {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cuisine: &'static [&'static str],
    meal_type: &'static [&'static str],
    tags: &'static [&'static str],
    total_time: &'static str,
    servings: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

const CATALOG_RECIPES: &[CatalogRecipe] = &[
    CatalogRecipe {
        id: "tomato-basil-soup",
        name: "Tomato Basil Soup",
        description: "A bright, quick soup built on canned tomatoes and fresh basil",
        cuisine: &["Italian"],
        meal_type: &["lunch", "dinner"],
        tags: &["vegetarian", "gluten-free"],
        total_time: "25 minutes",
        servings: 4,
        ingredients: &[
            "2 tbsp olive oil",
            "1 onion, diced",
            "2 cloves garlic",
            "800 g canned tomatoes",
            "1 handful basil",
        ],
        instructions: &[
            "Soften the onion and garlic in olive oil.",
            "Add the tomatoes and simmer for 15 minutes.",
            "Blend with the basil and season to taste.",
        ],
    },
    CatalogRecipe {
        id: "overnight-oats",
        name: "Overnight Oats",
        description: "Oats soaked in milk overnight with berries",
        cuisine: &["American"],
        meal_type: &["breakfast"],
        tags: &["vegetarian"],
        total_time: "5 minutes",
        servings: 1,
        ingredients: &["1/2 cup rolled oats", "1/2 cup milk", "1 handful berries"],
        instructions: &[
            "Combine oats and milk in a jar.",
            "Refrigerate overnight and top with berries.",
        ],
    },
    CatalogRecipe {
        id: "green-curry",
        name: "Thai Green Curry",
        description: "Coconut curry with vegetables and jasmine rice",
        cuisine: &["Thai"],
        meal_type: &["dinner"],
        tags: &["vegan", "gluten-free"],
        total_time: "30 minutes",
        servings: 4,
        ingredients: &[
            "2 tbsp green curry paste",
            "400 ml coconut milk",
            "1 aubergine",
            "1 cup green beans",
            "jasmine rice",
        ],
        instructions: &[
            "Fry the curry paste until fragrant.",
            "Add coconut milk and vegetables and simmer until tender.",
            "Serve over rice.",
        ],
    },
    CatalogRecipe {
        id: "chickpea-salad",
        name: "Chickpea Salad",
        description: "Crunchy chickpea salad with cucumber and lemon",
        cuisine: &["Mediterranean"],
        meal_type: &["lunch"],
        tags: &["vegan"],
        total_time: "10 minutes",
        servings: 2,
        ingredients: &[
            "1 can chickpeas",
            "1 cucumber",
            "1 lemon",
            "parsley",
        ],
        instructions: &["Chop everything and toss with lemon juice and oil."],
    },
    CatalogRecipe {
        id: "beef-chili",
        name: "Slow Beef Chili",
        description: "Hearty chili with beans and smoked paprika",
        cuisine: &["Mexican"],
        meal_type: &["dinner"],
        tags: &["gluten-free"],
        total_time: "55 minutes",
        servings: 6,
        ingredients: &[
            "500 g ground beef",
            "2 cans kidney beans",
            "1 can tomatoes",
            "1 tbsp smoked paprika",
        ],
        instructions: &[
            "Brown the beef.",
            "Add beans, tomatoes and spices.",
            "Simmer for 40 minutes.",
        ],
    },
];

/// Static seasonal definition
struct CatalogSeasonal {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    start: (i64, i64),
    end: (i64, i64),
    holiday: Option<&'static str>,
}

const CATALOG_SEASONAL: &[CatalogSeasonal] = &[
    CatalogSeasonal {
        id: "gazpacho",
        name: "Gazpacho",
        description: "Chilled tomato soup for hot days",
        start: (6, 1),
        end: (8, 31),
        holiday: None,
    },
    CatalogSeasonal {
        id: "pumpkin-pie",
        name: "Pumpkin Pie",
        description: "Spiced pumpkin custard in a flaky crust",
        start: (10, 1),
        end: (11, 30),
        holiday: Some("thanksgiving"),
    },
    CatalogSeasonal {
        id: "spring-pea-risotto",
        name: "Spring Pea Risotto",
        description: "Creamy risotto with fresh peas and mint",
        start: (3, 1),
        end: (5, 31),
        holiday: None,
    },
];

/// Recipes in the built-in catalog
#[must_use]
pub fn catalog_recipes() -> Vec<Recipe> {
    CATALOG_RECIPES
        .iter()
        .map(|entry| {
            let mut recipe = Recipe::new(entry.id, entry.name);
            recipe.description = entry.description.to_owned();
            recipe.cuisine = to_strings(entry.cuisine);
            recipe.meal_type = to_strings(entry.meal_type);
            recipe.tags = to_strings(entry.tags);
            recipe.total_time = entry.total_time.to_owned();
            recipe.servings = Some(entry.servings);
            recipe.ingredients = to_strings(entry.ingredients);
            recipe.instructions = to_strings(entry.instructions);
            recipe
        })
        .collect()
}

/// Seasonal recipes in the built-in catalog
#[must_use]
pub fn catalog_seasonal_recipes() -> Vec<SeasonalRecipe> {
    CATALOG_SEASONAL
        .iter()
        .map(|entry| {
            let mut recipe = SeasonalRecipe::new(entry.id, entry.name, entry.start, entry.end);
            recipe.description = entry.description.to_owned();
            if let Some(holiday) = entry.holiday {
                recipe.extra.insert("holiday".to_owned(), json!(holiday));
            }
            recipe
        })
        .collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Recipes inserted
    pub recipes_created: usize,
    /// Seasonal recipes inserted
    pub seasonal_created: usize,
    /// Entries skipped because the id already existed
    pub skipped: usize,
}

/// Insert the built-in catalog, skipping ids that already exist
///
/// # Errors
///
/// Returns an error for any failure other than a duplicate id
pub async fn seed_catalog(manager: &RecipeManager) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for recipe in catalog_recipes() {
        match manager.create_recipe(&recipe).await {
            Ok(()) => summary.recipes_created += 1,
            Err(e) if e.code == ErrorCode::ResourceAlreadyExists => {
                debug!(recipe_id = %recipe.id, "Recipe already seeded");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    for recipe in catalog_seasonal_recipes() {
        match manager.create_seasonal_recipe(&recipe).await {
            Ok(()) => summary.seasonal_created += 1,
            Err(e) if e.code == ErrorCode::ResourceAlreadyExists => {
                debug!(recipe_id = %recipe.id, "Seasonal recipe already seeded");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        recipes = summary.recipes_created,
        seasonal = summary.seasonal_created,
        skipped = summary.skipped,
        "Catalog seeded"
    );
    Ok(summary)
}
