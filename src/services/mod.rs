// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Keeps filter construction and date resolution out of the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Domain service layer
//!
//! Services depend on the [`RecipeStore`](crate::database::RecipeStore) seam rather
//! than a concrete database, so route tests can swap in any backend.

/// Recipe listing and seasonal lookup
pub mod recipes;

pub use recipes::RecipeService;
