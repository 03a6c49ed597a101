// ABOUTME: SQLite connection management and schema migrations for the Larder server
// ABOUTME: Hands out per-domain managers (recipes, users, posts) sharing one pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! # Database Management
//!
//! One `SqlitePool` backs every manager. List-valued fields are stored as JSON
//! text so tag membership can be pushed down with `json_each`.

/// In-memory recipe store for tests and benches
pub mod memory;
/// Community post operations
pub mod posts;
/// Recipe and seasonal recipe operations
pub mod recipes;
/// Built-in catalog used by the `seed-recipes` binary
pub mod seed_catalog;
/// The read seam consumed by the recipe service
pub mod store;
/// User profile operations
pub mod users;

pub use memory::InMemoryRecipeStore;
pub use posts::{CreatePostRequest, ListPostsFilter, PostManager};
pub use recipes::RecipeManager;
pub use store::RecipeStore;
pub use users::{CreateUserRequest, UpdateUserRequest, UserManager};

use crate::config::DatabaseUrl;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use larder_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Connection pool plus migrations
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database and run migrations
    ///
    /// In-memory databases use a single long-lived connection so every query sees
    /// the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        let connection_string = url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .with_context(|| format!("Invalid database URL: {connection_string}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = match url {
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
                SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect_with(options)
                    .await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %url, "Database ready");

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe and seasonal recipe operations
    #[must_use]
    pub fn recipes(&self) -> RecipeManager {
        RecipeManager::new(self.pool.clone())
    }

    /// User profile operations
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Community post operations
    #[must_use]
    pub fn posts(&self) -> PostManager {
        PostManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_recipes().await?;
        self.migrate_users().await?;
        self.migrate_posts().await?;
        Ok(())
    }

    /// Close the pool, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Parse an RFC 3339 timestamp column
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc))
}

/// Decode a JSON list column
pub(crate) fn decode_list(value: &str) -> AppResult<Vec<String>> {
    Ok(serde_json::from_str(value)?)
}
