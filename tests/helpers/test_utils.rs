// ABOUTME: Fixtures shared by integration tests
// ABOUTME: Recipe builders, in-memory databases, and a store that always fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{CalendarDay, FixedClock, RecipeFilter};
use larder_server::config::{DatabaseUrl, ServerConfig};
use larder_server::database::{Database, RecipeStore};
use larder_server::resources::ServerResources;
use larder_server::routes::build_router;
use larder_server::services::RecipeService;
use std::sync::Arc;

/// Build a recipe with the fields the filter looks at
pub fn recipe(
    id: &str,
    name: &str,
    meal: &[&str],
    cuisine: &[&str],
    tags: &[&str],
    total_time: &str,
) -> Recipe {
    let mut r = Recipe::new(id, name);
    r.meal_type = meal.iter().map(|s| (*s).to_owned()).collect();
    r.cuisine = cuisine.iter().map(|s| (*s).to_owned()).collect();
    r.tags = tags.iter().map(|s| (*s).to_owned()).collect();
    r.total_time = total_time.to_owned();
    r
}

/// Recipe A (lunch, 20 minutes) and recipe B (dinner, 25 minutes)
pub fn lunch_and_dinner() -> Vec<Recipe> {
    vec![
        recipe("a", "Recipe A", &["lunch"], &["Italian"], &["vegan"], "20 minutes"),
        recipe("b", "Recipe B", &["dinner"], &["Thai"], &[], "25 minutes"),
    ]
}

/// A small catalog spanning every filter dimension
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        recipe("a", "Recipe A", &["lunch"], &["Italian"], &["vegan"], "20 minutes"),
        recipe("b", "Recipe B", &["dinner"], &["Thai"], &[], "25 minutes"),
        recipe("soup", "Tomato Soup", &["lunch", "dinner"], &["Italian"], &["vegetarian"], "15 minutes"),
        recipe("oats", "Overnight Oats", &["breakfast"], &["American"], &["vegetarian"], "5 minutes"),
        recipe("chili", "Beef Chili", &["dinner"], &["Mexican"], &["gluten-free"], "60 minutes"),
        recipe("stew", "Slow Stew", &["dinner"], &["Irish"], &[], "two hours"),
        recipe("creme", "Crème Brûlée", &["dessert"], &["French"], &["vegetarian"], "45 minutes"),
    ]
}

/// Seasonal entries including one with a missing bound
pub fn sample_seasonal() -> Vec<SeasonalRecipe> {
    let mut incomplete = SeasonalRecipe::new("broken", "No End Day", (1, 1), (12, 31));
    incomplete.end_day = None;

    vec![
        SeasonalRecipe::new("gazpacho", "Gazpacho", (6, 1), (8, 31)),
        SeasonalRecipe::new("pie", "Pumpkin Pie", (10, 1), (11, 30)),
        SeasonalRecipe::new("winter", "Winter Stew", (12, 1), (2, 28)),
        incomplete,
    ]
}

/// Fresh in-memory database with migrations applied
pub async fn memory_database() -> Database {
    Database::new(&DatabaseUrl::Memory)
        .await
        .expect("Failed to open in-memory database")
}

/// In-memory database preloaded with recipes and seasonal recipes
pub async fn seeded_database(recipes: &[Recipe], seasonal: &[SeasonalRecipe]) -> Database {
    let db = memory_database().await;
    let manager = db.recipes();
    for r in recipes {
        manager.create_recipe(r).await.expect("Failed to insert recipe");
    }
    for s in seasonal {
        manager
            .create_seasonal_recipe(s)
            .await
            .expect("Failed to insert seasonal recipe");
    }
    db
}

/// Configuration used by route tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: larder_server::config::DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        environment: larder_server::config::Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Router over `db` with the clock pinned to `today`
pub fn router_with_clock(db: Database, today: CalendarDay) -> Router {
    let service = RecipeService::new(Arc::new(db.recipes()), Arc::new(FixedClock(today)));
    let resources = ServerResources::with_recipe_service(db, service, test_config());
    build_router(Arc::new(resources))
}

/// Router over `db` using the wall clock
pub fn router(db: Database) -> Router {
    build_router(Arc::new(ServerResources::new(db, test_config())))
}

/// A recipe store whose every lookup fails
pub struct FailingStore;

#[async_trait]
impl RecipeStore for FailingStore {
    async fn find_recipes(&self, _filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        Err(AppError::database("connection reset"))
    }

    async fn find_seasonal_recipes(&self, _today: CalendarDay) -> AppResult<Vec<SeasonalRecipe>> {
        Err(AppError::internal("pool closed"))
    }

    async fn find_recipe(&self, _id: &str) -> AppResult<Option<Recipe>> {
        Err(AppError::database("connection reset"))
    }
}

/// Router whose recipe reads always fail
pub async fn failing_router() -> Router {
    let db = memory_database().await;
    let service = RecipeService::with_system_clock(Arc::new(FailingStore));
    let resources = ServerResources::with_recipe_service(db, service, test_config());
    build_router(Arc::new(resources))
}
