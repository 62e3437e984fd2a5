use serde::{Deserialize, Serialize};

use crate::input::json_input::Activity;
use crate::time::Date;

/// One day of the itinerary.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DayPlan {
    date: Date,
    day_title: String,
    activities: Vec<Activity>,
    daily_summary: String,
    estimated_daily_cost: u32,
}

impl DayPlan {
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub fn day_title(&self) -> &str {
        &self.day_title
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn daily_summary(&self) -> &str {
        &self.daily_summary
    }

    #[must_use]
    pub const fn estimated_daily_cost(&self) -> u32 {
        self.estimated_daily_cost
    }

    /// Sum of the day's activity costs, activities without a cost count as 0.
    #[must_use]
    pub fn activity_cost_total(&self) -> u32 {
        self.activities
            .iter()
            .filter_map(Activity::estimated_cost)
            .sum()
    }
}

/// The complete plan document returned by the planning API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TripPlan {
    destination: String,
    duration_days: u32,
    theme: String,
    start_date: Date,
    end_date: Date,
    daily_plans: Vec<DayPlan>,
    total_estimated_cost: u32,
    general_tips: Vec<String>,
}

impl TripPlan {
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub const fn duration_days(&self) -> u32 {
        self.duration_days
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    #[must_use]
    pub fn daily_plans(&self) -> &[DayPlan] {
        &self.daily_plans
    }

    #[must_use]
    pub const fn total_estimated_cost(&self) -> u32 {
        self.total_estimated_cost
    }

    #[must_use]
    pub fn general_tips(&self) -> &[String] {
        &self.general_tips
    }

    /// The inclusive day count from `start_date` to `end_date`, the
    /// upstream `duration_days` field duplicates this.
    ///
    /// Returns `None` for an inverted date range.
    #[must_use]
    pub fn computed_duration_days(&self) -> Option<i64> {
        Date::trip_duration_days(self.start_date, self.end_date)
    }

    /// Sum of the declared per-day costs.
    #[must_use]
    pub fn daily_cost_total(&self) -> u32 {
        self.daily_plans
            .iter()
            .map(DayPlan::estimated_daily_cost)
            .sum()
    }
}
