// ABOUTME: Route handlers for user profiles and saved recipes
// ABOUTME: Profile CRUD plus idempotent bookmark add and remove
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use crate::database::{CreateUserRequest, UpdateUserRequest};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use larder_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body for POST /api/users/:id/saved-recipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecipeBody {
    /// Recipe to bookmark
    pub recipe_id: String,
}

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route(
                "/api/users/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route(
                "/api/users/:id/saved-recipes",
                post(Self::handle_save_recipe),
            )
            .route(
                "/api/users/:id/saved-recipes/:recipe_id",
                delete(Self::handle_unsave_recipe),
            )
            .with_state(resources)
    }

    /// Handle POST /api/users - Create a profile
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateUserRequest>,
    ) -> Result<Response, AppError> {
        let user = resources.database.users().create_user(&body).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle GET /api/users/:id - Read a profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .users()
            .get_user(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{id}'")).with_resource_id(&id))?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle PUT /api/users/:id - Partial profile update
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateUserRequest>,
    ) -> Result<Response, AppError> {
        let user = resources.database.users().update_user(&id, &body).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle DELETE /api/users/:id - Delete a profile
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.database.users().delete_user(&id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle POST /api/users/:id/saved-recipes - Bookmark a recipe
    async fn handle_save_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<SaveRecipeBody>,
    ) -> Result<Response, AppError> {
        if body.recipe_id.trim().is_empty() {
            return Err(AppError::missing_field("recipe_id"));
        }
        let user = resources
            .database
            .users()
            .save_recipe(&id, &body.recipe_id)
            .await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle DELETE /api/users/:id/saved-recipes/:recipe_id - Remove a bookmark
    async fn handle_unsave_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path((id, recipe_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .users()
            .unsave_recipe(&id, &recipe_id)
            .await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
