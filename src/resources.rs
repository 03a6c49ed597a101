// ABOUTME: Shared server state handed to every route via axum State
// ABOUTME: Bundles the database, the recipe service, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use crate::config::ServerConfig;
use crate::database::Database;
use crate::services::RecipeService;
use std::sync::Arc;

/// Resources shared across request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Database pool and managers
    pub database: Database,
    /// Read path for recipe listings
    pub recipes: RecipeService,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources; the recipe service reads from the database
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let recipes = RecipeService::with_system_clock(Arc::new(database.recipes()));
        Self::with_recipe_service(database, recipes, config)
    }

    /// Bundle resources with an explicit recipe service
    #[must_use]
    pub fn with_recipe_service(
        database: Database,
        recipes: RecipeService,
        config: ServerConfig,
    ) -> Self {
        Self {
            database,
            recipes,
            config: Arc::new(config),
        }
    }
}
