// Time utility functions
// Conversions between fractional hours and chrono types

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// Format a fractional hour for display.
///
/// `"12h"` gives `10:30 AM` style labels (whole hours drop the minutes, `9 AM`);
/// anything else gives `10:30`. Hour 24 wraps to midnight.
pub fn format_hour(hour: f64, time_format: &str) -> String {
    let total_minutes = if hour.is_finite() {
        (hour * 60.0).round().max(0.0) as i64
    } else {
        0
    };
    let h = (total_minutes / 60) % 24;
    let m = total_minutes % 60;

    if time_format != "12h" {
        return format!("{:02}:{:02}", h, m);
    }

    let ampm = if h >= 12 { "PM" } else { "AM" };
    let display_hour = match h {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    if m == 0 {
        format!("{} {}", display_hour, ampm)
    } else {
        format!("{}:{:02} {}", display_hour, m, ampm)
    }
}

/// Format `start..start + duration` as a range label
pub fn format_range(start: f64, duration: f64, time_format: &str) -> String {
    format!(
        "{} - {}",
        format_hour(start, time_format),
        format_hour(start + duration.max(0.0), time_format)
    )
}

/// Convert a fractional hour to a time of day, rounded to the minute.
///
/// Returns `None` outside `0..24`.
pub fn hour_to_time(hour: f64) -> Option<NaiveTime> {
    if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
        return None;
    }
    let minutes = (hour * 60.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(minutes.min(24 * 60 - 1) * 60, 0)
}

/// Fractional hour of a time of day
pub fn hour_of(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// The seven dates of the week containing `date`.
///
/// `first_day_of_week`: 0 = Sunday, 1 = Monday, etc.
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> [NaiveDate; 7] {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    let start = date - Duration::days(offset);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
