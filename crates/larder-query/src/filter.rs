// ABOUTME: Composite recipe filter built from the optional query-string fields
// ABOUTME: Conjunction of name, meal, cuisine, diet, and time predicates with permissive defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! # Recipe Filter Builder
//!
//! A [`FilterRequest`] is the wire shape: five optional strings where `"All"` means
//! "no constraint". [`RecipeFilter`] is the normalized predicate. The sentinel never
//! makes it past [`RecipeFilter::from_request`].
//!
//! Case handling is deliberately uneven: `meal` and `diet` are lowercased before the
//! exact-element match, `cuisine` is compared verbatim. Seeded data relies on this.

use crate::time_bucket::TimeBucket;
use larder_core::constants::wire;
use larder_core::models::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Filter parameters as they arrive on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Case-insensitive name substring
    #[serde(
        rename = "searchQuery",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub search_query: Option<String>,
    /// Meal-type tag, case-folded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
    /// Cuisine tag, case-sensitive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Diet tag matched against search tags, case-folded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Time bucket: `"15"`, `"30"`, `"60"`, or `"All"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Normalized conjunctive predicate over recipes
///
/// `RecipeFilter::default()` matches every recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    name_query: Option<String>,
    meal_type: Option<String>,
    cuisine: Option<String>,
    diet_tag: Option<String>,
    time_bucket: Option<TimeBucket>,
}

/// Drop empty values and the `"All"` sentinel; anything else constrains
fn constraint_value(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != wire::ALL_SENTINEL)
}

/// Build a filter from the five optional wire fields
///
/// Absent, empty, or `"All"` fields add no constraint. A whitespace-only
/// `searchQuery` adds none either; otherwise the query is used as given. An
/// unrecognised `time` value is ignored.
#[must_use]
pub fn build_recipe_filter(
    search_query: Option<&str>,
    meal: Option<&str>,
    cuisine: Option<&str>,
    diet: Option<&str>,
    time: Option<&str>,
) -> RecipeFilter {
    let name_query = search_query
        .filter(|q| !q.trim().is_empty())
        .map(str::to_lowercase);

    let time_bucket = constraint_value(time).and_then(|value| {
        let bucket = TimeBucket::from_wire(value);
        if bucket.is_none() {
            debug!(time = %value, "Ignoring unrecognised time bucket");
        }
        bucket
    });

    RecipeFilter {
        name_query,
        meal_type: constraint_value(meal).map(str::to_lowercase),
        cuisine: constraint_value(cuisine).map(str::to_owned),
        diet_tag: constraint_value(diet).map(str::to_lowercase),
        time_bucket,
    }
}

impl RecipeFilter {
    /// Build from a wire request
    #[must_use]
    pub fn from_request(request: &FilterRequest) -> Self {
        build_recipe_filter(
            request.search_query.as_deref(),
            request.meal.as_deref(),
            request.cuisine.as_deref(),
            request.diet.as_deref(),
            request.time.as_deref(),
        )
    }

    /// Lowercased name query
    #[must_use]
    pub fn name_query(&self) -> Option<&str> {
        self.name_query.as_deref()
    }

    /// Required meal-type tag (already lowercased)
    #[must_use]
    pub fn meal_type(&self) -> Option<&str> {
        self.meal_type.as_deref()
    }

    /// Required cuisine tag (verbatim)
    #[must_use]
    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    /// Required search tag (already lowercased)
    #[must_use]
    pub fn diet_tag(&self) -> Option<&str> {
        self.diet_tag.as_deref()
    }

    /// Required time bucket
    #[must_use]
    pub const fn time_bucket(&self) -> Option<TimeBucket> {
        self.time_bucket
    }

    /// Number of active field predicates
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        [
            self.name_query.is_some(),
            self.meal_type.is_some(),
            self.cuisine.is_some(),
            self.diet_tag.is_some(),
            self.time_bucket.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// True when the filter matches everything
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.constraint_count() == 0
    }

    /// Evaluate the filter against a recipe
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.name_query
            .as_deref()
            .is_none_or(|q| recipe.name.to_lowercase().contains(q))
            && list_contains(&recipe.meal_type, self.meal_type.as_deref())
            && list_contains(&recipe.cuisine, self.cuisine.as_deref())
            && list_contains(&recipe.tags, self.diet_tag.as_deref())
            && self
                .time_bucket
                .is_none_or(|bucket| bucket.matches(&recipe.total_time))
    }

    /// Keep only the recipes the filter matches, preserving order
    #[must_use]
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        if self.is_unconstrained() {
            return recipes;
        }
        recipes.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn list_contains(values: &[String], wanted: Option<&str>) -> bool {
    wanted.is_none_or(|w| values.iter().any(|v| v == w))
}

impl fmt::Display for RecipeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return f.write_str("<all>");
        }
        let mut parts = Vec::new();
        if let Some(q) = &self.name_query {
            parts.push(format!("name~{q:?}"));
        }
        if let Some(meal) = &self.meal_type {
            parts.push(format!("meal_type={meal:?}"));
        }
        if let Some(cuisine) = &self.cuisine {
            parts.push(format!("cuisine={cuisine:?}"));
        }
        if let Some(diet) = &self.diet_tag {
            parts.push(format!("tags={diet:?}"));
        }
        if let Some(bucket) = self.time_bucket {
            parts.push(format!("time={bucket}"));
        }
        f.write_str(&parts.join(" AND "))
    }
}
