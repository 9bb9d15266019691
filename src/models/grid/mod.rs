// Grid module
// Geometry and snapping configuration for the time grid

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a grid configuration is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("hour height must be a positive number of pixels, got {0}")]
    HourHeight(f64),
    #[error("snap increment must be a positive number of hours, got {0}")]
    SnapIncrement(f64),
    #[error("hour bounds must lie within 0..=24, got {start}..{end}")]
    BoundsOutOfRange { start: f64, end: f64 },
    #[error("start hour {start} must be before end hour {end}")]
    EmptyRange { start: f64, end: f64 },
    #[error("minimum duration {0} must be positive and fit inside the visible range")]
    MinimumDuration(f64),
    #[error("first day of week must be 0..=6, got {0}")]
    FirstDayOfWeek(u8),
    #[error("time format must be \"12h\" or \"24h\", got {0:?}")]
    TimeFormat(String),
}

/// Pixel geometry and snapping rules for the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pixels representing one hour
    pub hour_height_px: f64,
    /// Quantization step for drag and resize, in hours
    pub snap_increment_hours: f64,
    /// First visible hour
    pub start_hour: f64,
    /// Last visible hour
    pub end_hour: f64,
    /// Shortest duration a resize may produce
    pub min_duration_hours: f64,
    pub min_block_height_px: f64,
    /// Hour the grid scrolls to on open
    pub default_scroll_hour: f64,
    pub scroll_anchor_padding_px: f64,
    pub magnetic_threshold_px: f64,
    /// Gap between side-by-side blocks
    pub gutter_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hour_height_px: 60.0,
            snap_increment_hours: 0.25,
            start_hour: 0.0,
            end_hour: 24.0,
            min_duration_hours: 0.25,
            min_block_height_px: 20.0,
            default_scroll_hour: 8.0,
            scroll_anchor_padding_px: 15.0,
            magnetic_threshold_px: 30.0,
            gutter_px: 2.0,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hour_height_px.is_finite() && self.hour_height_px > 0.0) {
            return Err(ConfigError::HourHeight(self.hour_height_px));
        }
        if !(self.snap_increment_hours.is_finite() && self.snap_increment_hours > 0.0) {
            return Err(ConfigError::SnapIncrement(self.snap_increment_hours));
        }

        let in_day = |h: f64| h.is_finite() && (0.0..=24.0).contains(&h);
        if !in_day(self.start_hour) || !in_day(self.end_hour) {
            return Err(ConfigError::BoundsOutOfRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.start_hour >= self.end_hour {
            return Err(ConfigError::EmptyRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }

        let span = self.end_hour - self.start_hour;
        if !(self.min_duration_hours.is_finite()
            && self.min_duration_hours > 0.0
            && self.min_duration_hours <= span)
        {
            return Err(ConfigError::MinimumDuration(self.min_duration_hours));
        }

        Ok(())
    }

    /// Total pixel height of the visible range
    pub fn grid_height_px(&self) -> f64 {
        (self.end_hour - self.start_hour) * self.hour_height_px
    }
}
