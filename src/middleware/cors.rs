// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the mobile and web clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS settings from `CORS_ALLOWED_ORIGINS`
///
/// An empty list (or `*`) allows any origin outside production. In production an
/// empty list allows no cross-origin callers.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://larder.app,http://localhost:19006"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins = &config.cors_allowed_origins;
    let wildcard = origins.is_empty() || origins.iter().any(|o| o == "*");

    let allow_origin = if wildcard {
        if config.environment.is_production() {
            warn!("No CORS origins configured in production; cross-origin requests will be rejected");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        } else {
            AllowOrigin::any()
        }
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
