// ABOUTME: Main library entry point for the Larder recipe API server
// ABOUTME: Wires configuration, logging, storage, services, routes, and the typed client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![deny(unsafe_code)]

//! # Larder Server
//!
//! REST backend for a recipe discovery app with a small social feed.
//!
//! ## Architecture
//!
//! - **`larder-core`**: models, error codes, constants
//! - **`larder-query`**: the recipe filter builder and seasonal matcher
//! - **Database**: `SQLite` via sqlx, one manager per domain
//! - **Services**: recipe listing behind the [`database::RecipeStore`] seam
//! - **Routes**: axum handlers with tracing, CORS, and timeout layers
//! - **Client**: typed reqwest client for the recipe endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Larder server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Typed HTTP client for the recipe endpoints
pub mod client;
/// Environment-driven configuration
pub mod config;
/// `SQLite` storage and managers
pub mod database;
/// Structured logging setup
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// Shared handler state
pub mod resources;
/// HTTP routes
pub mod routes;
/// Domain services
pub mod services;

pub use larder_core::errors;
pub use larder_core::models;
