// ABOUTME: User profile database operations
// ABOUTME: Handles profile CRUD and the per-user saved recipe list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use super::{decode_list, parse_timestamp, Database};
use anyhow::Result;
use chrono::Utc;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::UserProfile;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;

/// Request to create a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Identity-provider uid
    pub id: String,
    /// Public handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Short biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image reference
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl CreateUserRequest {
    /// Reject blank required fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first blank field
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("id", &self.id),
            ("username", &self.username),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::missing_field(field));
            }
        }
        Ok(())
    }
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New handle
    #[serde(default)]
    pub username: Option<String>,
    /// New email
    #[serde(default)]
    pub email: Option<String>,
    /// New biography
    #[serde(default)]
    pub bio: Option<String>,
    /// New avatar
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl Database {
    /// Create the `user_profiles` table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                bio TEXT,
                profile_image TEXT,
                saved_recipes TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_user_profiles_username ON user_profiles(username)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Database manager for user profiles
#[derive(Clone)]
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a duplicate id, or a database error
    pub async fn create_user(&self, request: &CreateUserRequest) -> AppResult<UserProfile> {
        request.validate()?;
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO user_profiles (id, username, email, bio, profile_image, saved_recipes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, '[]', $6, $6)
            ",
        )
        .bind(&request.id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.bio)
        .bind(&request.profile_image)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::already_exists(format!("User '{}'", request.id))
                    .with_resource_id(&request.id)
            }
            _ => AppError::database(format!("Failed to create user: {e}")),
        })?;

        info!(user_id = %request.id, "User profile created");

        Ok(UserProfile {
            id: request.id.clone(),
            username: request.username.clone(),
            email: request.email.clone(),
            bio: request.bio.clone(),
            profile_image: request.profile_image.clone(),
            saved_recipes: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a profile by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_user(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            r"
            SELECT id, username, email, bio, profile_image, saved_recipes, created_at, updated_at
            FROM user_profiles
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Apply a partial update and return the new profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist, or a database error
    pub async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> AppResult<UserProfile> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                bio = COALESCE($4, bio),
                profile_image = COALESCE($5, profile_image),
                updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&update.username)
        .bind(&update.email)
        .bind(&update.bio)
        .bind(&update.profile_image)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        self.get_user(id).await?.ok_or_else(|| user_not_found(id))
    }

    /// Delete a profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist, or a database error
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        info!(user_id = %id, "User profile deleted");
        Ok(())
    }

    /// Add a recipe to the saved list; saving twice keeps one entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist, or a database error
    pub async fn save_recipe(&self, user_id: &str, recipe_id: &str) -> AppResult<UserProfile> {
        self.modify_saved_recipes(user_id, |saved| {
            if !saved.iter().any(|r| r == recipe_id) {
                saved.push(recipe_id.to_owned());
            }
        })
        .await
    }

    /// Remove a recipe from the saved list; removing an absent id is a no-op
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist, or a database error
    pub async fn unsave_recipe(&self, user_id: &str, recipe_id: &str) -> AppResult<UserProfile> {
        self.modify_saved_recipes(user_id, |saved| saved.retain(|r| r != recipe_id))
            .await
    }

    async fn modify_saved_recipes<F>(&self, user_id: &str, modify: F) -> AppResult<UserProfile>
    where
        F: FnOnce(&mut Vec<String>) + Send,
    {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let current: Option<String> =
            sqlx::query_scalar("SELECT saved_recipes FROM user_profiles WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to read saved recipes: {e}")))?;

        let mut saved = decode_list(&current.ok_or_else(|| user_not_found(user_id))?)?;
        modify(&mut saved);

        sqlx::query("UPDATE user_profiles SET saved_recipes = $2, updated_at = $3 WHERE id = $1")
            .bind(user_id)
            .bind(serde_json::to_string(&saved)?)
            .bind(Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to update saved recipes: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

        self.get_user(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }
}

fn user_not_found(id: &str) -> AppError {
    AppError::not_found(format!("User '{id}'")).with_resource_id(id)
}

/// Convert a database row to a `UserProfile`
fn row_to_user(row: &SqliteRow) -> AppResult<UserProfile> {
    let saved_json: String = row.get("saved_recipes");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(UserProfile {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        bio: row.get("bio"),
        profile_image: row.get("profile_image"),
        saved_recipes: decode_list(&saved_json)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
