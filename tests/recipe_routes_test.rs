// ABOUTME: HTTP tests for the recipe endpoints using the axum test helper
// ABOUTME: Covers query-string filtering, lookups, seasonal picks, and error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{
    failing_router, lunch_and_dinner, memory_database, router, router_with_clock,
    sample_catalog, sample_seasonal, seeded_database,
};
use larder_core::models::{Recipe, SeasonalRecipe};
use larder_query::CalendarDay;
use serde_json::{json, Value};

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

#[tokio::test]
async fn test_health() {
    let app = router(memory_database().await);
    let body: Value = AxumTestRequest::get("/health")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_checks_database() {
    let app = router(memory_database().await);
    let body: Value = AxumTestRequest::get("/ready")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["database"], true);
}

// ============================================================================
// GET /api/recipes
// ============================================================================

#[tokio::test]
async fn test_list_without_query_returns_everything() {
    let app = router(seeded_database(&sample_catalog(), &[]).await);
    let recipes: Vec<Recipe> = AxumTestRequest::get("/api/recipes")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(recipes.len(), sample_catalog().len());
}

#[tokio::test]
async fn test_list_with_all_sentinels_returns_everything() {
    let app = router(seeded_database(&sample_catalog(), &[]).await);
    let recipes: Vec<Recipe> =
        AxumTestRequest::get("/api/recipes?searchQuery=&meal=All&cuisine=All&diet=All&time=All")
            .send(app)
            .await
            .assert_status(StatusCode::OK)
            .json();
    assert_eq!(recipes.len(), sample_catalog().len());
}

#[tokio::test]
async fn test_list_lunch_within_thirty_minutes() {
    let app = router(seeded_database(&lunch_and_dinner(), &[]).await);
    let recipes: Vec<Recipe> = AxumTestRequest::get("/api/recipes?meal=Lunch&time=30")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ids(&recipes), vec!["a"]);
}

#[tokio::test]
async fn test_list_cuisine_is_case_sensitive() {
    let db = seeded_database(&sample_catalog(), &[]).await;

    let lower: Vec<Recipe> = AxumTestRequest::get("/api/recipes?cuisine=italian")
        .send(router(db.clone()))
        .await
        .json();
    assert!(lower.is_empty());

    let exact: Vec<Recipe> = AxumTestRequest::get("/api/recipes?cuisine=Italian")
        .send(router(db))
        .await
        .json();
    assert_eq!(ids(&exact), vec!["a", "soup"]);
}

#[tokio::test]
async fn test_list_search_query_is_url_decoded() {
    let app = router(seeded_database(&sample_catalog(), &[]).await);
    let recipes: Vec<Recipe> = AxumTestRequest::get("/api/recipes?searchQuery=tomato%20soup")
        .send(app)
        .await
        .json();
    assert_eq!(ids(&recipes), vec!["soup"]);
}

#[tokio::test]
async fn test_list_whitespace_values_are_not_trimmed() {
    let db = seeded_database(&sample_catalog(), &[]).await;

    let padded: Vec<Recipe> = AxumTestRequest::get("/api/recipes?searchQuery=soup%20")
        .send(router(db.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(padded.is_empty());

    let blank_meal: Vec<Recipe> = AxumTestRequest::get("/api/recipes?meal=%20")
        .send(router(db.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(blank_meal.is_empty());

    let blank_search: Vec<Recipe> = AxumTestRequest::get("/api/recipes?searchQuery=%20%20")
        .send(router(db))
        .await
        .json();
    assert_eq!(blank_search.len(), sample_catalog().len());
}

#[tokio::test]
async fn test_list_uses_client_field_names() {
    let app = router(seeded_database(&lunch_and_dinner(), &[]).await);
    let body: Value = AxumTestRequest::get("/api/recipes").send(app).await.json();
    assert_eq!(body[0]["totalTime"], "20 minutes");
    assert_eq!(body[0]["meal_type"], json!(["lunch"]));
}

#[tokio::test]
async fn test_storage_failure_is_not_an_empty_list() {
    let response = AxumTestRequest::get("/api/recipes?meal=lunch")
        .send(failing_router().await)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_seasonal_storage_failure_maps_to_database_error() {
    let body: Value = AxumTestRequest::get("/api/recipes/seasonal")
        .send(failing_router().await)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

// ============================================================================
// GET /api/recipes/:id and POST /api/recipes
// ============================================================================

#[tokio::test]
async fn test_get_recipe_by_id() {
    let app = router(seeded_database(&sample_catalog(), &[]).await);
    let recipe: Recipe = AxumTestRequest::get("/api/recipes/soup")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(recipe.name, "Tomato Soup");
}

#[tokio::test]
async fn test_unknown_recipe_is_404() {
    let app = router(memory_database().await);
    let body: Value = AxumTestRequest::get("/api/recipes/nope")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["resource_id"], "nope");
}

#[tokio::test]
async fn test_create_recipe_then_duplicate_is_409() {
    let db = memory_database().await;
    let payload = json!({
        "id": "pancakes",
        "name": "Pancakes",
        "meal_type": ["breakfast"],
        "cuisine": ["American"],
        "totalTime": "20 minutes"
    });

    let created: Recipe = AxumTestRequest::post("/api/recipes")
        .json(&payload)
        .send(router(db.clone()))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(created.total_time, "20 minutes");

    let body: Value = AxumTestRequest::post("/api/recipes")
        .json(&payload)
        .send(router(db))
        .await
        .assert_status(StatusCode::CONFLICT)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_recipe_requires_name() {
    let app = router(memory_database().await);
    let body: Value = AxumTestRequest::post("/api/recipes")
        .json(&json!({ "id": "blank", "name": "  " }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

// ============================================================================
// Seasonal
// ============================================================================

#[tokio::test]
async fn test_seasonal_follows_the_clock() {
    let db = seeded_database(&[], &sample_seasonal()).await;

    let july: Vec<SeasonalRecipe> = AxumTestRequest::get("/api/recipes/seasonal")
        .send(router_with_clock(db.clone(), CalendarDay::new(7, 15)))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(july.len(), 1);
    assert_eq!(july[0].id, "gazpacho");

    let september: Vec<SeasonalRecipe> = AxumTestRequest::get("/api/recipes/seasonal")
        .send(router_with_clock(db, CalendarDay::new(9, 1)))
        .await
        .json();
    assert!(september.is_empty());
}

#[tokio::test]
async fn test_create_seasonal_keeps_extra_fields() {
    let db = memory_database().await;
    AxumTestRequest::post("/api/recipes/seasonal")
        .json(&json!({
            "id": "pie",
            "name": "Pumpkin Pie",
            "start_month": 10,
            "start_day": 1,
            "end_month": 11,
            "end_day": 30,
            "holiday": "thanksgiving"
        }))
        .send(router(db.clone()))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = AxumTestRequest::get("/api/recipes/seasonal")
        .send(router_with_clock(db, CalendarDay::new(10, 15)))
        .await
        .json();
    assert_eq!(body[0]["holiday"], "thanksgiving");
}
