// ABOUTME: Recipe service combining the filter builder, the clock, and the recipe store
// ABOUTME: Serves filtered listings and today's seasonal recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use crate::database::RecipeStore;
use crate::logging::AppLogger;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{Clock, FilterRequest, RecipeFilter, SystemClock};
use std::sync::Arc;
use tracing::warn;

/// Recipe listing service
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    clock: Arc<dyn Clock>,
}

impl RecipeService {
    /// Create a service over `store` using `clock` for "today"
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a service using the wall clock
    #[must_use]
    pub fn with_system_clock(store: Arc<dyn RecipeStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Recipes matching the request, in store order
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when the store lookup fails
    pub async fn list_recipes(&self, request: &FilterRequest) -> AppResult<Vec<Recipe>> {
        let filter = RecipeFilter::from_request(request);
        let recipes = self
            .store
            .find_recipes(&filter)
            .await
            .map_err(|e| lookup_failed("recipes", e))?;

        AppLogger::log_filter_evaluation(
            &filter.to_string(),
            filter.constraint_count(),
            recipes.len(),
        );
        Ok(recipes)
    }

    /// A single recipe by external id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has the id, or `DatabaseError`
    pub async fn get_recipe(&self, id: &str) -> AppResult<Recipe> {
        self.store
            .find_recipe(id)
            .await
            .map_err(|e| lookup_failed("recipe", e))?
            .ok_or_else(|| AppError::not_found(format!("Recipe '{id}'")).with_resource_id(id))
    }

    /// Seasonal recipes active on the clock's current UTC day
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when the store lookup fails
    pub async fn seasonal_recipes_today(&self) -> AppResult<Vec<SeasonalRecipe>> {
        let today = self.clock.today();
        let recipes = self
            .store
            .find_seasonal_recipes(today)
            .await
            .map_err(|e| lookup_failed("seasonal recipes", e))?;

        AppLogger::log_seasonal_lookup(today.month, today.day, recipes.len());
        Ok(recipes)
    }
}

/// Store failures always reach the caller as a database error
fn lookup_failed(what: &str, error: AppError) -> AppError {
    if !error.code.is_server_error() {
        return error;
    }
    warn!(error = %error, "Lookup of {what} failed");
    AppError::database(format!("Failed to load {what}: {}", error.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::InMemoryRecipeStore;
    use larder_core::models::SeasonalRecipe;
    use larder_query::{CalendarDay, FixedClock};

    fn lunch_and_dinner() -> Vec<Recipe> {
        let mut a = Recipe::new("a", "Soup A");
        a.meal_type = vec!["lunch".to_owned()];
        a.total_time = "20 minutes".to_owned();

        let mut b = Recipe::new("b", "Stew B");
        b.meal_type = vec!["dinner".to_owned()];
        b.total_time = "25 minutes".to_owned();

        vec![a, b]
    }

    #[tokio::test]
    async fn test_list_recipes_applies_filter() {
        let store = InMemoryRecipeStore::new(lunch_and_dinner(), Vec::new());
        let service = RecipeService::with_system_clock(Arc::new(store));

        let request = FilterRequest {
            meal: Some("Lunch".to_owned()),
            time: Some("30".to_owned()),
            ..FilterRequest::default()
        };
        let recipes = service.list_recipes(&request).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "a");
    }

    #[tokio::test]
    async fn test_seasonal_uses_injected_clock() {
        let seasonal = vec![SeasonalRecipe::new("g", "Gazpacho", (6, 1), (8, 31))];
        let store = Arc::new(InMemoryRecipeStore::new(Vec::new(), seasonal));

        let july = RecipeService::new(store.clone(), Arc::new(FixedClock(CalendarDay::new(7, 15))));
        assert_eq!(july.seasonal_recipes_today().await.unwrap().len(), 1);

        let september = RecipeService::new(store, Arc::new(FixedClock(CalendarDay::new(9, 1))));
        assert!(september.seasonal_recipes_today().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let service =
            RecipeService::with_system_clock(Arc::new(InMemoryRecipeStore::default()));
        let err = service.get_recipe("missing").await.unwrap_err();
        assert_eq!(err.code, larder_core::errors::ErrorCode::ResourceNotFound);
    }
}
