// ABOUTME: Core data models for recipes, seasonal recipes, profiles, and posts
// ABOUTME: Re-exports the model types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

/// Recipe and seasonal recipe models
pub mod recipe;
/// User profile and community post models
pub mod social;

pub use recipe::{HasSeasonalWindow, Recipe, SeasonalRecipe, SeasonalWindow};
pub use social::{Post, UserProfile};
