// ABOUTME: Route handlers for the community post feed
// ABOUTME: Paged listing, create, read, delete, and like
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use crate::database::{CreatePostRequest, ListPostsFilter};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use larder_core::errors::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Post routes handler
pub struct PostRoutes;

impl PostRoutes {
    /// Create all post routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/posts", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/api/posts/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .route("/api/posts/:id/like", post(Self::handle_like))
            .with_state(resources)
    }

    /// Handle GET /api/posts - Newest posts first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(filter): Query<ListPostsFilter>,
    ) -> Result<Response, AppError> {
        let posts = resources.database.posts().list_posts(&filter).await?;
        Ok((StatusCode::OK, Json(posts)).into_response())
    }

    /// Handle POST /api/posts - Publish a post
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreatePostRequest>,
    ) -> Result<Response, AppError> {
        let post = resources.database.posts().create_post(&body).await?;
        Ok((StatusCode::CREATED, Json(post)).into_response())
    }

    /// Handle GET /api/posts/:id - Read a post
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let post = resources
            .database
            .posts()
            .get_post(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Post '{id}'")).with_resource_id(id.to_string())
            })?;
        Ok((StatusCode::OK, Json(post)).into_response())
    }

    /// Handle DELETE /api/posts/:id - Remove a post
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources.database.posts().delete_post(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle POST /api/posts/:id/like - Increment the like counter
    async fn handle_like(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let post = resources.database.posts().like_post(id).await?;
        Ok((StatusCode::OK, Json(post)).into_response())
    }
}
