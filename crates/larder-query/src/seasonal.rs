// ABOUTME: Seasonal window matching against a UTC calendar day
// ABOUTME: Provides CalendarDay, the four-field window test, and the Clock abstraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! # Seasonal Window Matcher
//!
//! A seasonal entry is active on `(month, day)` iff
//! `start_month <= month <= end_month` and `start_day <= day <= end_day`.
//!
//! The month and day bounds are compared independently, so this is not calendar
//! interval containment. A December to February window never matches, and a
//! June 20 to August 10 window is inactive on July 5. Product has not asked for
//! wrap-around support; any change here alters which recipes the client shows.
//!
//! Missing bounds fail the comparison rather than acting as wildcards.

use chrono::{DateTime, Datelike, Utc};
use larder_core::models::HasSeasonalWindow;
use serde::{Deserialize, Serialize};

/// A month/day pair on a fixed calendar (no year, no leap-year handling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl CalendarDay {
    /// Construct from raw month and day
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Read the calendar fields of a UTC timestamp
    #[must_use]
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        Self {
            month: at.month(),
            day: at.day(),
        }
    }
}

/// Whether `recipe` is active on `month`/`day`
#[must_use]
pub fn is_seasonal_match<S>(recipe: &S, month: u32, day: u32) -> bool
where
    S: HasSeasonalWindow + ?Sized,
{
    let window = recipe.seasonal_window();
    let month = i64::from(month);
    let day = i64::from(day);

    match (
        window.start_month,
        window.end_month,
        window.start_day,
        window.end_day,
    ) {
        (Some(start_month), Some(end_month), Some(start_day), Some(end_day)) => {
            start_month <= month && end_month >= month && start_day <= day && end_day >= day
        }
        _ => false,
    }
}

/// [`is_seasonal_match`] for a [`CalendarDay`]
#[must_use]
pub fn is_active_on<S>(recipe: &S, today: CalendarDay) -> bool
where
    S: HasSeasonalWindow + ?Sized,
{
    is_seasonal_match(recipe, today.month, today.day)
}

/// Source of "today"
pub trait Clock: Send + Sync {
    /// Current UTC calendar day
    fn today(&self) -> CalendarDay;
}

/// Wall-clock UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDay {
        CalendarDay::from_datetime(&Utc::now())
    }
}

/// A clock pinned to one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDay);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDay {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use larder_core::models::{SeasonalRecipe, SeasonalWindow};

    #[test]
    fn test_summer_window() {
        let summer = SeasonalRecipe::new("s1", "Gazpacho", (6, 1), (8, 31));
        assert!(is_seasonal_match(&summer, 7, 15));
        assert!(is_seasonal_match(&summer, 6, 1));
        assert!(is_seasonal_match(&summer, 8, 31));
        assert!(!is_seasonal_match(&summer, 9, 1));
        assert!(!is_seasonal_match(&summer, 5, 31));
    }

    #[test]
    fn test_day_bounds_apply_every_month() {
        // Mid-month bounds are checked against every month in range
        let window = SeasonalWindow {
            start_month: Some(6),
            start_day: Some(20),
            end_month: Some(8),
            end_day: Some(10),
        };
        assert!(!is_seasonal_match(&window, 7, 5));
        assert!(!is_seasonal_match(&window, 6, 25));
    }

    #[test]
    fn test_year_wrapping_window_never_matches() {
        let winter = SeasonalRecipe::new("s2", "Mulled Wine", (12, 1), (2, 28));
        for month in 1..=12 {
            assert!(!is_seasonal_match(&winter, month, 15));
        }
    }

    #[test]
    fn test_missing_field_never_matches() {
        let full = SeasonalWindow {
            start_month: Some(1),
            start_day: Some(1),
            end_month: Some(12),
            end_day: Some(31),
        };
        assert!(is_seasonal_match(&full, 3, 3));

        let variants = [
            SeasonalWindow {
                start_month: None,
                ..full
            },
            SeasonalWindow {
                start_day: None,
                ..full
            },
            SeasonalWindow {
                end_month: None,
                ..full
            },
            SeasonalWindow {
                end_day: None,
                ..full
            },
        ];
        for window in variants {
            for month in 1..=12 {
                assert!(!is_seasonal_match(&window, month, 15));
            }
        }
    }

    #[test]
    fn test_calendar_day_uses_utc_fields() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(CalendarDay::from_datetime(&at), CalendarDay::new(12, 31));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(CalendarDay::new(7, 4));
        let summer = SeasonalRecipe::new("s1", "Gazpacho", (6, 1), (8, 31));
        assert!(is_active_on(&summer, clock.today()));
    }
}
