// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request span creation, request logging, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

/// CORS configuration
pub mod cors;
/// Request spans and request logging
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, log_requests, request_id, REQUEST_ID_HEADER};
