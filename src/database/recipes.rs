// ABOUTME: Database operations for recipes and seasonal recipes
// ABOUTME: Pushes tag and seasonal predicates into SQL and applies the rest in process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use super::{decode_list, Database};
use crate::logging::AppLogger;
use anyhow::Result;
use chrono::Utc;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{is_active_on, CalendarDay, RecipeFilter};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::time::Instant;
use tracing::debug;

const RECIPE_COLUMNS: &str = r"
    id, name, description, ingredients, servings, serving_size, cuisine,
    total_time, meal_type, instructions, tags, image, season,
    start_month, start_day, end_month, end_day, created_at
";

const SEASONAL_COLUMNS: &str = r"
    id, name, description, image, start_month, start_day, end_month, end_day,
    extra, created_at
";

impl Database {
    /// Create recipe and seasonal recipe tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                ingredients TEXT NOT NULL DEFAULT '[]',
                servings INTEGER,
                serving_size TEXT,
                cuisine TEXT NOT NULL DEFAULT '[]',
                total_time TEXT NOT NULL DEFAULT '',
                meal_type TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                tags TEXT NOT NULL DEFAULT '[]',
                image TEXT,
                season TEXT,
                start_month INTEGER,
                start_day INTEGER,
                end_month INTEGER,
                end_day INTEGER,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS seasonal_recipes (
                row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                image TEXT,
                start_month INTEGER,
                start_day INTEGER,
                end_month INTEGER,
                end_day INTEGER,
                extra TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_seasonal_recipes_months ON seasonal_recipes(start_month, end_month)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Database manager for recipe operations
#[derive(Clone)]
pub struct RecipeManager {
    pool: SqlitePool,
}

impl RecipeManager {
    /// Create a new recipe manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Insert a recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken, or a database error
    pub async fn create_recipe(&self, recipe: &Recipe) -> AppResult<()> {
        let query = format!(
            "INSERT INTO recipes ({RECIPE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)"
        );

        sqlx::query(&query)
            .bind(&recipe.id)
            .bind(&recipe.name)
            .bind(&recipe.description)
            .bind(serde_json::to_string(&recipe.ingredients)?)
            .bind(recipe.servings.map(i64::from))
            .bind(&recipe.serving_size)
            .bind(serde_json::to_string(&recipe.cuisine)?)
            .bind(&recipe.total_time)
            .bind(serde_json::to_string(&recipe.meal_type)?)
            .bind(serde_json::to_string(&recipe.instructions)?)
            .bind(serde_json::to_string(&recipe.tags)?)
            .bind(&recipe.image)
            .bind(&recipe.season)
            .bind(recipe.start_month)
            .bind(recipe.start_day)
            .bind(recipe.end_month)
            .bind(recipe.end_day)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error("Recipe", &recipe.id, e))?;

        debug!(recipe_id = %recipe.id, "Recipe created");
        Ok(())
    }

    /// Get a recipe by external id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_recipe(&self, id: &str) -> AppResult<Option<Recipe>> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// List recipes matching a filter, in insertion order
    ///
    /// Meal, cuisine, and diet membership are evaluated by `SQLite`. The filter is
    /// then re-applied in process, which covers the name and time predicates.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let started = Instant::now();

        let mut conditions = Vec::new();
        let mut bind_values: Vec<&str> = Vec::new();

        for (column, value) in [
            ("meal_type", filter.meal_type()),
            ("cuisine", filter.cuisine()),
            ("tags", filter.diet_tag()),
        ] {
            if let Some(value) = value {
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM json_each(recipes.{column}) WHERE json_each.value = ?)"
                ));
                bind_values.push(value);
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query =
            format!("SELECT {RECIPE_COLUMNS} FROM recipes {where_clause} ORDER BY row_id ASC");

        let mut sql_query = sqlx::query(&query);
        for value in &bind_values {
            sql_query = sql_query.bind(*value);
        }

        let result = sql_query.fetch_all(&self.pool).await;
        AppLogger::log_database_operation(
            "select",
            "recipes",
            result.is_ok(),
            elapsed_ms(started),
        );
        let rows = result.map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        let candidates = rows
            .iter()
            .map(row_to_recipe)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(filter.apply(candidates))
    }

    // ========================================================================
    // Seasonal recipes
    // ========================================================================

    /// Insert a seasonal recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken, or a database error
    pub async fn create_seasonal_recipe(&self, recipe: &SeasonalRecipe) -> AppResult<()> {
        let query = format!(
            "INSERT INTO seasonal_recipes ({SEASONAL_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
        );

        sqlx::query(&query)
            .bind(&recipe.id)
            .bind(&recipe.name)
            .bind(&recipe.description)
            .bind(&recipe.image)
            .bind(recipe.start_month)
            .bind(recipe.start_day)
            .bind(recipe.end_month)
            .bind(recipe.end_day)
            .bind(serde_json::to_string(&recipe.extra)?)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error("Seasonal recipe", &recipe.id, e))?;

        debug!(recipe_id = %recipe.id, "Seasonal recipe created");
        Ok(())
    }

    /// Get a seasonal recipe by external id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_seasonal_recipe(&self, id: &str) -> AppResult<Option<SeasonalRecipe>> {
        let query = format!("SELECT {SEASONAL_COLUMNS} FROM seasonal_recipes WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get seasonal recipe: {e}")))?;

        row.map(|r| row_to_seasonal_recipe(&r)).transpose()
    }

    /// List every seasonal recipe regardless of date
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_seasonal_recipes(&self) -> AppResult<Vec<SeasonalRecipe>> {
        let query = format!("SELECT {SEASONAL_COLUMNS} FROM seasonal_recipes ORDER BY row_id ASC");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list seasonal recipes: {e}")))?;

        rows.iter().map(row_to_seasonal_recipe).collect()
    }

    /// List seasonal recipes whose window contains `today`
    ///
    /// Rows with a NULL bound fail the SQL comparison and are never returned.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_active_seasonal_recipes(
        &self,
        today: CalendarDay,
    ) -> AppResult<Vec<SeasonalRecipe>> {
        let started = Instant::now();
        let month = i64::from(today.month);
        let day = i64::from(today.day);

        let query = format!(
            r"
            SELECT {SEASONAL_COLUMNS}
            FROM seasonal_recipes
            WHERE start_month <= $1 AND end_month >= $1
              AND start_day <= $2 AND end_day >= $2
            ORDER BY row_id ASC
            "
        );

        let result = sqlx::query(&query)
            .bind(month)
            .bind(day)
            .fetch_all(&self.pool)
            .await;
        AppLogger::log_database_operation(
            "select",
            "seasonal_recipes",
            result.is_ok(),
            elapsed_ms(started),
        );
        let rows = result
            .map_err(|e| AppError::database(format!("Failed to list seasonal recipes: {e}")))?;

        let recipes = rows
            .iter()
            .map(row_to_seasonal_recipe)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(recipes
            .into_iter()
            .filter(|r| is_active_on(r, today))
            .collect())
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn insert_error(resource: &str, id: &str, error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::already_exists(format!("{resource} '{id}'")).with_resource_id(id)
        }
        _ => AppError::database(format!("Failed to insert {}: {error}", resource.to_lowercase())),
    }
}

/// Convert a database row to a `Recipe`
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let ingredients_json: String = row.get("ingredients");
    let cuisine_json: String = row.get("cuisine");
    let meal_type_json: String = row.get("meal_type");
    let instructions_json: String = row.get("instructions");
    let tags_json: String = row.get("tags");
    let servings: Option<i64> = row.get("servings");

    Ok(Recipe {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        ingredients: decode_list(&ingredients_json)?,
        servings: servings.and_then(|s| u32::try_from(s).ok()),
        serving_size: row.get("serving_size"),
        cuisine: decode_list(&cuisine_json)?,
        total_time: row.get("total_time"),
        meal_type: decode_list(&meal_type_json)?,
        instructions: decode_list(&instructions_json)?,
        tags: decode_list(&tags_json)?,
        image: row.get("image"),
        season: row.get("season"),
        start_month: row.get("start_month"),
        start_day: row.get("start_day"),
        end_month: row.get("end_month"),
        end_day: row.get("end_day"),
    })
}

/// Convert a database row to a `SeasonalRecipe`
fn row_to_seasonal_recipe(row: &SqliteRow) -> AppResult<SeasonalRecipe> {
    let extra_json: String = row.get("extra");

    Ok(SeasonalRecipe {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        image: row.get("image"),
        start_month: row.get("start_month"),
        start_day: row.get("start_day"),
        end_month: row.get("end_month"),
        end_day: row.get("end_day"),
        extra: serde_json::from_str(&extra_json)?,
    })
}
