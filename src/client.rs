// ABOUTME: Typed HTTP client for the recipe endpoints
// ABOUTME: Explicit request objects replace UI state; absent fields go out as the All sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Recipe API client
//!
//! ```no_run
//! # async fn demo() -> larder_core::errors::AppResult<()> {
//! use larder_server::client::{RecipeApiClient, RecipeListRequest};
//! use larder_query::TimeBucket;
//!
//! let client = RecipeApiClient::new("http://localhost:8081");
//! let request = RecipeListRequest::new().meal("lunch").time(TimeBucket::From15To30);
//! let recipes = client.list_recipes(&request).await?;
//! # Ok(())
//! # }
//! ```

use larder_core::constants::{defaults, wire};
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::{FilterRequest, TimeBucket};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const SERVICE: &str = "larder-api";

/// Recipe listing parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeListRequest {
    /// Name substring
    pub search_query: Option<String>,
    /// Meal type
    pub meal: Option<String>,
    /// Cuisine, case-sensitive on the server
    pub cuisine: Option<String>,
    /// Diet tag
    pub diet: Option<String>,
    /// Cooking-time bucket
    pub time: Option<TimeBucket>,
}

impl RecipeListRequest {
    /// An unfiltered request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict by name substring
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Restrict by meal type
    #[must_use]
    pub fn meal(mut self, meal: impl Into<String>) -> Self {
        self.meal = Some(meal.into());
        self
    }

    /// Restrict by cuisine
    #[must_use]
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Restrict by diet tag
    #[must_use]
    pub fn diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    /// Restrict by cooking-time bucket
    #[must_use]
    pub const fn time(mut self, bucket: TimeBucket) -> Self {
        self.time = Some(bucket);
        self
    }

    /// Wire form; every absent field is sent as `All`
    #[must_use]
    pub fn to_filter_request(&self) -> FilterRequest {
        let or_all = |value: &Option<String>| {
            Some(
                value
                    .clone()
                    .unwrap_or_else(|| wire::ALL_SENTINEL.to_owned()),
            )
        };

        FilterRequest {
            search_query: Some(self.search_query.clone().unwrap_or_default()),
            meal: or_all(&self.meal),
            cuisine: or_all(&self.cuisine),
            diet: or_all(&self.diet),
            time: Some(
                self.time
                    .map_or(wire::ALL_SENTINEL, |bucket| bucket.as_wire())
                    .to_owned(),
            ),
        }
    }
}

/// HTTP client for a Larder server
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    base_url: String,
    client: Client,
}

impl RecipeApiClient {
    /// Create a client with the default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(defaults::CLIENT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit timeout
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = client_or_default(Client::builder().timeout(timeout).build(), timeout);

        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List recipes matching `request`
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` if the server cannot be reached, or
    /// `ExternalServiceError` for a non-success status or an unreadable body
    pub async fn list_recipes(&self, request: &RecipeListRequest) -> AppResult<Vec<Recipe>> {
        let url = format!("{}/api/recipes", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&request.to_filter_request())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a recipe by id; `None` when the server answers 404
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or any other non-success status
    pub async fn get_recipe(&self, id: &str) -> AppResult<Option<Recipe>> {
        let url = format!("{}/api/recipes/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(recipe_id = %id, "Recipe not found on server");
            return Ok(None);
        }

        Self::parse_response(response).await.map(Some)
    }

    /// Seasonal recipes active today on the server
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures or a non-success status
    pub async fn seasonal_recipes(&self) -> AppResult<Vec<SeasonalRecipe>> {
        let url = format!("{}/api/recipes/seasonal", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::external_service(
                SERVICE,
                format!("Failed to read response body (HTTP {}): {e}", status.as_u16()),
            )
            .with_details(serde_json::json!({ "status": status.as_u16() }))
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP {}: {text}", status.as_u16()),
            )
            .with_details(serde_json::json!({ "status": status.as_u16() })));
        }

        serde_json::from_str(&text).map_err(|e| {
            AppError::external_service(SERVICE, format!("Unreadable response body: {e}"))
        })
    }
}

/// Fall back to reqwest's defaults when the configured client cannot be built
fn client_or_default(built: reqwest::Result<Client>, timeout: Duration) -> Client {
    built.unwrap_or_else(|e| {
        warn!(
            error = %e,
            timeout_secs = timeout.as_secs(),
            "Failed to build HTTP client; falling back to a default client without a timeout"
        );
        Client::new()
    })
}
