// ABOUTME: Recipe and seasonal recipe data models shared by the engine, server, and client
// ABOUTME: Field names follow the JSON shape the mobile client already consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use serde::{Deserialize, Serialize};

/// A recipe as stored and served
///
/// `id` is assigned by the ingestion process and is distinct from the storage row
/// key. The seasonal fields are optional plain integers; they are not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// External identifier
    pub id: String,
    /// Display name (required)
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Raw ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Free-text serving size ("1 cup", "2 slices")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Cuisine tags, matched case-sensitively
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Free-text duration of the form "<N> minutes"
    #[serde(rename = "totalTime", default)]
    pub total_time: String,
    /// Meal-type tags, stored lowercase
    #[serde(default)]
    pub meal_type: Vec<String>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Search tags (diet labels live here)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Season name ("summer", "holiday")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// First month of the seasonal window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<i64>,
    /// First day of the seasonal window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_day: Option<i64>,
    /// Last month of the seasonal window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<i64>,
    /// Last day of the seasonal window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_day: Option<i64>,
}

impl Recipe {
    /// Create a recipe with only the identity fields populated
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            ingredients: Vec::new(),
            servings: None,
            serving_size: None,
            cuisine: Vec::new(),
            total_time: String::new(),
            meal_type: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            image: None,
            season: None,
            start_month: None,
            start_day: None,
            end_month: None,
            end_day: None,
        }
    }
}

/// A reduced-shape recipe that is only listed while its window is active
///
/// Unknown fields are kept in `extra` and returned unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRecipe {
    /// External identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// First month of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<i64>,
    /// First day of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_day: Option<i64>,
    /// Last month of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<i64>,
    /// Last day of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_day: Option<i64>,
    /// Fields outside the known shape
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SeasonalRecipe {
    /// Create a seasonal recipe with the given window bounds
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        (start_month, start_day): (i64, i64),
        (end_month, end_day): (i64, i64),
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: None,
            start_month: Some(start_month),
            start_day: Some(start_day),
            end_month: Some(end_month),
            end_day: Some(end_day),
            extra: serde_json::Map::new(),
        }
    }
}

/// The four date-window integers of a seasonal entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    /// First month
    pub start_month: Option<i64>,
    /// First day
    pub start_day: Option<i64>,
    /// Last month
    pub end_month: Option<i64>,
    /// Last day
    pub end_day: Option<i64>,
}

/// Anything carrying a seasonal window
pub trait HasSeasonalWindow {
    /// Extract the window bounds
    fn seasonal_window(&self) -> SeasonalWindow;
}

impl HasSeasonalWindow for SeasonalWindow {
    fn seasonal_window(&self) -> SeasonalWindow {
        *self
    }
}

impl HasSeasonalWindow for Recipe {
    fn seasonal_window(&self) -> SeasonalWindow {
        SeasonalWindow {
            start_month: self.start_month,
            start_day: self.start_day,
            end_month: self.end_month,
            end_day: self.end_day,
        }
    }
}

impl HasSeasonalWindow for SeasonalRecipe {
    fn seasonal_window(&self) -> SeasonalWindow {
        SeasonalWindow {
            start_month: self.start_month,
            start_day: self.start_day,
            end_month: self.end_month,
            end_day: self.end_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_uses_client_field_names() {
        let mut recipe = Recipe::new("r1", "Tomato Soup");
        recipe.total_time = "20 minutes".to_owned();
        recipe.meal_type = vec!["lunch".to_owned()];

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["totalTime"], "20 minutes");
        assert_eq!(json["meal_type"][0], "lunch");
        assert!(json.get("start_month").is_none());
    }

    #[test]
    fn test_seasonal_recipe_keeps_unknown_fields() {
        let json = serde_json::json!({
            "id": "s1",
            "name": "Pumpkin Pie",
            "start_month": 10,
            "start_day": 1,
            "end_month": 11,
            "end_day": 30,
            "holiday": "thanksgiving"
        });

        let recipe: SeasonalRecipe = serde_json::from_value(json).unwrap();
        assert_eq!(recipe.extra["holiday"], "thanksgiving");
        assert_eq!(recipe.seasonal_window().end_day, Some(30));

        let back = serde_json::to_value(&recipe).unwrap();
        assert_eq!(back["holiday"], "thanksgiving");
    }

    #[test]
    fn test_seasonal_recipe_tolerates_missing_window() {
        let recipe: SeasonalRecipe =
            serde_json::from_value(serde_json::json!({ "id": "s2", "name": "Mystery" })).unwrap();
        assert_eq!(recipe.seasonal_window(), SeasonalWindow::default());
    }
}
