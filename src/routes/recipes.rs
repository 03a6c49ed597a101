// ABOUTME: Route handlers for the recipe catalog REST API
// ABOUTME: Filtered listing, lookup by id, seasonal picks, and catalog inserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Recipe routes
//!
//! `GET /api/recipes` accepts `searchQuery`, `meal`, `cuisine`, `diet`, and `time`
//! query keys. Each may be omitted or set to `All`.

use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use larder_core::errors::AppError;
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::FilterRequest;
use std::sync::Arc;

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/recipes/seasonal",
                get(Self::handle_seasonal).post(Self::handle_create_seasonal),
            )
            .route("/api/recipes/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - Filtered recipe listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<FilterRequest>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.list_recipes(&query).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /api/recipes - Add a recipe to the catalog
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(recipe): Json<Recipe>,
    ) -> Result<Response, AppError> {
        require_identity(&recipe.id, &recipe.name)?;
        resources.database.recipes().create_recipe(&recipe).await?;
        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle GET /api/recipes/seasonal - Seasonal recipes active today
    async fn handle_seasonal(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.seasonal_recipes_today().await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /api/recipes/seasonal - Add a seasonal recipe
    async fn handle_create_seasonal(
        State(resources): State<Arc<ServerResources>>,
        Json(recipe): Json<SeasonalRecipe>,
    ) -> Result<Response, AppError> {
        require_identity(&recipe.id, &recipe.name)?;
        resources
            .database
            .recipes()
            .create_seasonal_recipe(&recipe)
            .await?;
        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle GET /api/recipes/:id - Recipe by external id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = resources.recipes.get_recipe(&id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}

fn require_identity(id: &str, name: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::missing_field("id"));
    }
    if name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    Ok(())
}
