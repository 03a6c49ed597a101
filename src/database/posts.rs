// ABOUTME: Community feed database operations
// ABOUTME: Creates, pages, deletes, and likes posts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use super::{parse_timestamp, Database};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use larder_core::constants::limits;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::Post;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;
use uuid::Uuid;

/// Request to create a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Author's profile id
    pub user_id: String,
    /// Author's handle
    pub username: String,
    /// Post body
    pub content: String,
    /// Attached image
    #[serde(default)]
    pub image: Option<String>,
    /// Related recipe
    #[serde(default)]
    pub recipe_id: Option<String>,
}

impl CreatePostRequest {
    /// Reject blank required fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first blank field
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("user_id", &self.user_id),
            ("username", &self.username),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::missing_field(field));
            }
        }
        Ok(())
    }
}

/// Paging options for the feed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPostsFilter {
    /// Maximum number of results (default 50, capped at 200)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset for pagination
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListPostsFilter {
    /// Effective limit after applying the default and the cap
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(limits::DEFAULT_PAGE_SIZE)
            .min(limits::MAX_PAGE_SIZE)
    }
}

impl Database {
    /// Create the `posts` table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_posts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                username TEXT NOT NULL,
                content TEXT NOT NULL,
                image TEXT,
                recipe_id TEXT,
                likes INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at DESC)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Database manager for community posts
#[derive(Clone)]
pub struct PostManager {
    pool: SqlitePool,
}

impl PostManager {
    /// Create a new post manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, or a database error
    pub async fn create_post(&self, request: &CreatePostRequest) -> AppResult<Post> {
        request.validate()?;

        let post = Post {
            id: Uuid::new_v4(),
            user_id: request.user_id.clone(),
            username: request.username.clone(),
            content: request.content.clone(),
            image: request.image.clone(),
            recipe_id: request.recipe_id.clone(),
            likes: 0,
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO posts (id, user_id, username, content, image, recipe_id, likes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7)
            ",
        )
        .bind(post.id.to_string())
        .bind(&post.user_id)
        .bind(&post.username)
        .bind(&post.content)
        .bind(&post.image)
        .bind(&post.recipe_id)
        .bind(post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create post: {e}")))?;

        info!(post_id = %post.id, user_id = %post.user_id, "Post created");
        Ok(post)
    }

    /// Get a post by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_post(&self, id: Uuid) -> AppResult<Option<Post>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, username, content, image, recipe_id, likes, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get post: {e}")))?;

        row.map(|r| row_to_post(&r)).transpose()
    }

    /// List posts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_posts(&self, filter: &ListPostsFilter) -> AppResult<Vec<Post>> {
        let limit_val = i64::from(filter.effective_limit());
        let offset_val = i64::from(filter.offset.unwrap_or(0));

        let rows = sqlx::query(
            r"
            SELECT id, user_id, username, content, image, recipe_id, likes, created_at
            FROM posts
            ORDER BY created_at DESC, rowid DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit_val)
        .bind(offset_val)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list posts: {e}")))?;

        rows.iter().map(row_to_post).collect()
    }

    /// Delete a post
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the post does not exist, or a database error
    pub async fn delete_post(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete post: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }
        Ok(())
    }

    /// Increment the like counter and return the updated post
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the post does not exist, or a database error
    pub async fn like_post(&self, id: Uuid) -> AppResult<Post> {
        let result = sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to like post: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        self.get_post(id).await?.ok_or_else(|| post_not_found(id))
    }
}

fn post_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Post '{id}'")).with_resource_id(id.to_string())
}

/// Convert a database row to a `Post`
fn row_to_post(row: &SqliteRow) -> AppResult<Post> {
    let id: String = row.get("id");
    let likes: i64 = row.get("likes");
    let created_at: String = row.get("created_at");

    Ok(Post {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::internal(format!("Invalid post id '{id}': {e}")))?,
        user_id: row.get("user_id"),
        username: row.get("username"),
        content: row.get("content"),
        image: row.get("image"),
        recipe_id: row.get("recipe_id"),
        likes: u32::try_from(likes).unwrap_or(u32::MAX),
        created_at: parse_timestamp(&created_at)?,
    })
}
