//! Frontend Models
//!
//! Entities come from the shared domain crate; this module adds display helpers.

use chrono::NaiveDate;

pub use roadmap_domain::{board, dates};
pub use roadmap_domain::{
    completion_percent, Column, ColumnField, EffortLevel, Feature, FeatureInput, FeaturePatch, Milestone, MilestoneFilter,
    MilestoneQuery, MilestoneType, Priority, SortDirection, SortField, TShirtSize,
};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Card due date, e.g. "Jan 5, 2025"
pub fn format_due(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// CSS modifier for a card's priority color
pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-high",
        Priority::Medium => "priority-medium",
        Priority::Low => "priority-low",
    }
}
