// ABOUTME: Read interface the recipe service queries for listings and seasonal picks
// ABOUTME: Implemented by the SQLite recipe manager and the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use super::RecipeManager;
use async_trait::async_trait;
use larder_core::errors::AppResult;
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{CalendarDay, RecipeFilter};

/// Recipe read access
///
/// A failed lookup is an error, never an empty list.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Recipes matching every active predicate of `filter`
    async fn find_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>>;

    /// Seasonal recipes whose window contains `today`
    async fn find_seasonal_recipes(&self, today: CalendarDay) -> AppResult<Vec<SeasonalRecipe>>;

    /// A single recipe by external id
    async fn find_recipe(&self, id: &str) -> AppResult<Option<Recipe>>;
}

#[async_trait]
impl RecipeStore for RecipeManager {
    async fn find_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        self.list_recipes(filter).await
    }

    async fn find_seasonal_recipes(&self, today: CalendarDay) -> AppResult<Vec<SeasonalRecipe>> {
        self.list_active_seasonal_recipes(today).await
    }

    async fn find_recipe(&self, id: &str) -> AppResult<Option<Recipe>> {
        self.get_recipe(id).await
    }
}
