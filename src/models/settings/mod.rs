// Settings module
// User preferences persisted to settings.toml

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::grid::{ConfigError, GridConfig};
use crate::models::item::ItemFilter;

/// Which calendar view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Day,
    #[default]
    Week,
}

impl ViewMode {
    /// Number of days a navigation step moves
    pub fn step_days(&self) -> i64 {
        match self {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        }
    }
}

/// How `total_columns` is computed for overlapping items.
///
/// `Local` uses the item and its direct neighbours only. `Cluster` gives every
/// item in a connected overlap cluster the same column count. Column indices
/// are identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnWidthMode {
    #[default]
    Local,
    Cluster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view: ViewMode,
    pub first_day_of_week: u8,
    pub show_completed: bool,
    pub column_width: ColumnWidthMode,
    pub time_format: String,
    /// Calendars whose items are left off the grid
    pub hidden_calendars: BTreeSet<String>,
    // Tables serialize after plain values
    pub grid: GridConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view: ViewMode::Week,
            first_day_of_week: 0, // Sunday
            show_completed: false,
            column_width: ColumnWidthMode::Local,
            time_format: "12h".to_string(),
            hidden_calendars: BTreeSet::new(),
            grid: GridConfig::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;

        if self.first_day_of_week > 6 {
            return Err(ConfigError::FirstDayOfWeek(self.first_day_of_week));
        }

        if self.time_format != "12h" && self.time_format != "24h" {
            return Err(ConfigError::TimeFormat(self.time_format.clone()));
        }

        Ok(())
    }

    pub fn item_filter(&self) -> ItemFilter {
        ItemFilter {
            show_completed: self.show_completed,
            hidden_calendars: self.hidden_calendars.clone(),
        }
    }

    pub fn is_calendar_visible(&self, calendar: &str) -> bool {
        !self.hidden_calendars.contains(calendar)
    }

    pub fn set_calendar_visible(&mut self, calendar: &str, visible: bool) {
        if visible {
            self.hidden_calendars.remove(calendar);
        } else {
            self.hidden_calendars.insert(calendar.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.view, ViewMode::Week);
        assert_eq!(settings.column_width, ColumnWidthMode::Local);
    }

    #[test]
    fn test_invalid_first_day_rejected() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::FirstDayOfWeek(7)));
    }

    #[test]
    fn test_invalid_time_format_rejected() {
        let settings = Settings {
            time_format: "13h".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::TimeFormat(_))));
    }

    #[test]
    fn test_calendar_visibility_feeds_item_filter() {
        let mut settings = Settings::default();
        assert!(settings.is_calendar_visible("personal"));

        settings.set_calendar_visible("personal", false);
        assert!(!settings.is_calendar_visible("personal"));
        assert!(settings.item_filter().hidden_calendars.contains("personal"));
        assert!(!settings.item_filter().show_completed);

        settings.set_calendar_visible("personal", true);
        assert!(settings.item_filter().hidden_calendars.is_empty());
    }

    #[test]
    fn test_view_step_days() {
        assert_eq!(ViewMode::Day.step_days(), 1);
        assert_eq!(ViewMode::Week.step_days(), 7);
    }
}
