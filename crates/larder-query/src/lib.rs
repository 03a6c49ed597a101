// ABOUTME: Recipe query engine for the Larder platform
// ABOUTME: Builds composite recipe filters and matches seasonal date windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![deny(unsafe_code)]

//! # Larder Query
//!
//! Pure, synchronous predicates behind the recipe listing endpoints.
//!
//! - [`build_recipe_filter`] turns the optional `searchQuery`/`meal`/`cuisine`/
//!   `diet`/`time` fields into a [`RecipeFilter`].
//! - [`is_seasonal_match`] decides whether a seasonal entry is active on a day.
//!
//! Nothing here performs I/O or holds shared state; storage backends translate or
//! evaluate these predicates themselves.

/// Composite recipe filter
pub mod filter;
/// Seasonal window matching and the clock seam
pub mod seasonal;
/// Cooking-time buckets
pub mod time_bucket;

pub use filter::{build_recipe_filter, FilterRequest, RecipeFilter};
pub use seasonal::{is_active_on, is_seasonal_match, CalendarDay, Clock, FixedClock, SystemClock};
pub use time_bucket::TimeBucket;
