// ABOUTME: Coarse cooking-time buckets matched against the free-text totalTime field
// ABOUTME: Each bucket is a start-anchored, case-insensitive "<N> minutes" pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Time buckets.
//!
//! `totalTime` is free text, so buckets are textual patterns rather than numeric
//! comparisons. The three ranges are defined independently: [1,15], [15,30] and
//! [31,60]. Fifteen minutes therefore lands in two buckets while nothing overlaps at
//! thirty. Existing clients depend on that, so it is reproduced as-is.

use larder_core::constants::wire;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static UP_TO_15_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(TimeBucket::UpTo15.pattern()).ok());

static FROM_15_TO_30_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(TimeBucket::From15To30.pattern()).ok());

static FROM_31_TO_60_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(TimeBucket::From31To60.pattern()).ok());

/// One of the three duration categories offered by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// 1 to 15 minutes, wire value `"15"`
    UpTo15,
    /// 15 to 30 minutes, wire value `"30"`
    From15To30,
    /// 31 to 60 minutes, wire value `"60"`
    From31To60,
}

impl TimeBucket {
    /// Every bucket, in wire order
    pub const ALL: [Self; 3] = [Self::UpTo15, Self::From15To30, Self::From31To60];

    /// Parse a wire value; anything other than `"15"`, `"30"`, `"60"` is `None`
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            wire::TIME_BUCKET_15 => Some(Self::UpTo15),
            wire::TIME_BUCKET_30 => Some(Self::From15To30),
            wire::TIME_BUCKET_60 => Some(Self::From31To60),
            _ => None,
        }
    }

    /// Wire value sent by the client
    #[must_use]
    pub const fn as_wire(&self) -> &'static str {
        match self {
            Self::UpTo15 => wire::TIME_BUCKET_15,
            Self::From15To30 => wire::TIME_BUCKET_30,
            Self::From31To60 => wire::TIME_BUCKET_60,
        }
    }

    /// Regular expression source for this bucket
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::UpTo15 => r"(?i)^([1-9]|1[0-5])\s*minutes",
            Self::From15To30 => r"(?i)^(1[5-9]|2[0-9]|30)\s*minutes",
            Self::From31To60 => r"(?i)^(3[1-9]|[45][0-9]|60)\s*minutes",
        }
    }

    fn regex(self) -> Option<&'static Regex> {
        let compiled = match self {
            Self::UpTo15 => &UP_TO_15_PATTERN,
            Self::From15To30 => &FROM_15_TO_30_PATTERN,
            Self::From31To60 => &FROM_31_TO_60_PATTERN,
        };
        compiled.as_ref()
    }

    /// Whether a `totalTime` value falls in this bucket
    ///
    /// Values that do not start with a number followed by "minutes" never match.
    #[must_use]
    pub fn matches(&self, total_time: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(total_time))
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets_for(total_time: &str) -> Vec<TimeBucket> {
        TimeBucket::ALL
            .into_iter()
            .filter(|bucket| bucket.matches(total_time))
            .collect()
    }

    #[test]
    fn test_boundary_values() {
        // 15 sits in two buckets; kept for compatibility with the mobile filters
        assert_eq!(
            buckets_for("15 minutes"),
            vec![TimeBucket::UpTo15, TimeBucket::From15To30]
        );
        assert_eq!(buckets_for("16 minutes"), vec![TimeBucket::From15To30]);
        assert_eq!(buckets_for("30 minutes"), vec![TimeBucket::From15To30]);
        assert_eq!(buckets_for("31 minutes"), vec![TimeBucket::From31To60]);
        assert_eq!(buckets_for("60 minutes"), vec![TimeBucket::From31To60]);
        assert!(buckets_for("0 minutes").is_empty());
        assert!(buckets_for("61 minutes").is_empty());
    }

    #[test]
    fn test_single_digit_and_case() {
        assert_eq!(buckets_for("1 minutes"), vec![TimeBucket::UpTo15]);
        assert_eq!(buckets_for("9 MINUTES"), vec![TimeBucket::UpTo15]);
        assert_eq!(buckets_for("45Minutes"), vec![TimeBucket::From31To60]);
    }

    #[test]
    fn test_match_is_anchored_at_start() {
        assert!(buckets_for("about 20 minutes").is_empty());
        assert!(buckets_for("120 minutes").is_empty());
        assert!(buckets_for("150 minutes").is_empty());
        assert!(buckets_for("05 minutes").is_empty());
    }

    #[test]
    fn test_trailing_text_is_allowed() {
        assert_eq!(
            buckets_for("20 minutes plus chilling"),
            vec![TimeBucket::From15To30]
        );
    }

    #[test]
    fn test_malformed_values_match_nothing() {
        assert!(buckets_for("").is_empty());
        assert!(buckets_for("1 hour").is_empty());
        assert!(buckets_for("20 min").is_empty());
        assert!(buckets_for("twenty minutes").is_empty());
    }

    #[test]
    fn test_wire_round_trip() {
        for bucket in TimeBucket::ALL {
            assert_eq!(TimeBucket::from_wire(bucket.as_wire()), Some(bucket));
        }
        assert_eq!(TimeBucket::from_wire("All"), None);
        assert_eq!(TimeBucket::from_wire("45"), None);
    }
}
