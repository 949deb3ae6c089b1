//! Configuration types for demo data generation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Ranges used when generating random activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of activities generated per user (inclusive range).
    pub activities_per_user: RangeInclusive<usize>,

    /// Activity duration in minutes (inclusive range).
    pub duration_minutes: RangeInclusive<i32>,

    /// Calories burned per minute; an activity's calories are
    /// `duration * k` for a `k` drawn from this range.
    pub calories_per_minute: RangeInclusive<i32>,

    /// Activities are dated between today and this many days ago.
    pub max_days_ago: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            activities_per_user: 5..=10,
            duration_minutes: 30..=120,
            calories_per_minute: 8..=12,
            max_days_ago: 30,
        }
    }
}

impl SeedConfig {
    pub fn with_activities_per_user(mut self, range: RangeInclusive<usize>) -> Self {
        self.activities_per_user = range;
        self
    }

    pub fn with_max_days_ago(mut self, days: i64) -> Self {
        self.max_days_ago = days;
        self
    }
}
