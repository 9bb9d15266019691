// Test fixtures - reusable test data
// Provides consistent items and dates across the integration tests

#![allow(dead_code)]

use cadence_calendar::models::item::TimeRangedItem;
use chrono::NaiveDate;

/// Monday, Dec 18, 2023
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 18).unwrap()
}

/// A timed item on `monday()`
pub fn item(id: &str, start: f64, duration: f64) -> TimeRangedItem {
    TimeRangedItem::new(id, format!("Item {}", id), monday(), start, duration)
}

/// Items from `(start, duration)` pairs, ids numbered from 0
pub fn items(ranges: &[(f64, f64)]) -> Vec<TimeRangedItem> {
    ranges
        .iter()
        .enumerate()
        .map(|(i, (start, duration))| item(&i.to_string(), *start, *duration))
        .collect()
}
