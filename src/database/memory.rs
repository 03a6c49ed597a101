// ABOUTME: Vec-backed recipe store evaluating the query predicates directly
// ABOUTME: Used by tests and benches as the reference behavior for the SQLite store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use super::RecipeStore;
use async_trait::async_trait;
use larder_core::errors::AppResult;
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{is_active_on, CalendarDay, RecipeFilter};

/// In-memory recipe catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeStore {
    recipes: Vec<Recipe>,
    seasonal: Vec<SeasonalRecipe>,
}

impl InMemoryRecipeStore {
    /// Create a store over the given catalog
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>, seasonal: Vec<SeasonalRecipe>) -> Self {
        Self { recipes, seasonal }
    }

    /// Every stored recipe
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn find_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn find_seasonal_recipes(&self, today: CalendarDay) -> AppResult<Vec<SeasonalRecipe>> {
        Ok(self
            .seasonal
            .iter()
            .filter(|r| is_active_on(*r, today))
            .cloned()
            .collect())
    }

    async fn find_recipe(&self, id: &str) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }
}
