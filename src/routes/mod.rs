// ABOUTME: Route module organization for the Larder HTTP API
// ABOUTME: Assembles domain routers and the shared middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Route module for the Larder server
//!
//! Each domain module contains route definitions and thin handlers that delegate
//! to managers or services.

/// Health check and readiness routes
pub mod health;
/// Community post routes
pub mod posts;
/// Recipe catalog routes
pub mod recipes;
/// User profile routes
pub mod users;

pub use health::HealthRoutes;
pub use posts::PostRoutes;
pub use recipes::RecipeRoutes;
pub use users::UserRoutes;

use crate::middleware::{create_request_span, log_requests, setup_cors};
use crate::resources::ServerResources;
use axum::{body::Body, extract::Request, Router};
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    let timeout = resources.config.request_timeout();

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()))
        .merge(PostRoutes::routes(resources))
        .layer(axum::middleware::from_fn(log_requests))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| create_request_span(request)),
        )
}
