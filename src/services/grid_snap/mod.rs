//! Pointer-to-time conversion for drag-create, drag-move and drag-resize.
//!
//! Every method is a pure function of its arguments and the wrapped
//! [`GridConfig`]. Gesture state ("drag started at y") belongs to the caller.
//! Out-of-range pointers are clamped, never rejected.

use crate::models::grid::GridConfig;

// Slack for float division when snapping the bounds themselves
const EPSILON: f64 = 1e-9;

/// Round `value` to the nearest multiple of `increment`.
///
/// An increment that is not a positive finite number leaves the value as is.
pub fn snap_to_grid(value: f64, increment: f64) -> f64 {
    if !value.is_finite() || !(increment.is_finite() && increment > 0.0) {
        return value;
    }
    (value / increment).round() * increment
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapCalculator {
    config: GridConfig,
}

impl GridSnapCalculator {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Hour under a pixel offset measured from the top of the grid, unsnapped.
    ///
    /// Infinite offsets saturate to the nearer bound. NaN resolves to `start_hour`.
    pub fn raw_hour(&self, pixel_offset: f64) -> f64 {
        let (start, end) = self.bounds();
        if pixel_offset.is_nan() || pixel_offset == f64::NEG_INFINITY {
            return start;
        }
        if pixel_offset == f64::INFINITY {
            return end;
        }
        start + pixel_offset / self.hour_height()
    }

    /// Snapped, clamped hour for a pixel offset.
    ///
    /// The result is a multiple of the snap increment and lies within
    /// `start_hour..=end_hour - minimum_span`.
    pub fn hour_at_offset(&self, pixel_offset: f64, minimum_span: f64) -> f64 {
        let (start, end) = self.bounds();
        let span = if minimum_span.is_finite() {
            minimum_span.max(0.0)
        } else {
            0.0
        };
        self.snap_within(self.raw_hour(pixel_offset), start, (end - span).max(start))
    }

    /// Start hour for a new item created at the pointer
    pub fn start_for_create(&self, pixel_offset: f64) -> f64 {
        self.hour_at_offset(pixel_offset, self.min_duration())
    }

    /// Start hour for an item being moved.
    ///
    /// `grab_offset_px` is the distance from the item's top edge to where the
    /// pointer grabbed it, so the item does not jump under the pointer.
    pub fn start_for_move(&self, pixel_offset: f64, grab_offset_px: f64, duration: f64) -> f64 {
        let grab = if grab_offset_px.is_finite() {
            grab_offset_px
        } else {
            0.0
        };
        self.hour_at_offset(pixel_offset - grab, duration)
    }

    /// New duration after dragging the bottom edge by `delta_px`.
    ///
    /// The new end lands on the grid, the duration never drops below the
    /// minimum and the end never passes `end_hour`.
    pub fn resize_end(&self, start_hour: f64, original_duration: f64, delta_px: f64) -> f64 {
        let (start_bound, end_bound) = self.bounds();
        let start = finite_or(start_hour, start_bound);
        let duration = finite_or(original_duration, 0.0).max(0.0);

        let lo = start + self.min_duration();
        if lo > end_bound {
            return (end_bound - start).max(0.0);
        }

        let raw_end = start + duration + self.hour_delta(delta_px);
        self.snap_within(raw_end, lo, end_bound) - start
    }

    /// New `(start, duration)` after dragging the top edge by `delta_px`.
    ///
    /// The end of the item stays where it was.
    pub fn resize_start(
        &self,
        start_hour: f64,
        original_duration: f64,
        delta_px: f64,
    ) -> (f64, f64) {
        let (start_bound, _) = self.bounds();
        let start = finite_or(start_hour, start_bound);
        let duration = finite_or(original_duration, 0.0).max(0.0);
        let end = start + duration;

        let hi = end - self.min_duration();
        if hi < start_bound {
            return (start, duration);
        }

        let new_start = self.snap_within(start + self.hour_delta(delta_px), start_bound, hi);
        (new_start, end - new_start)
    }

    /// Fit a typed-in `(start, duration)` onto the grid.
    ///
    /// The start snaps and leaves room for the minimum duration. The end
    /// snaps and stays within `end_hour`.
    pub fn fit_range(&self, start_hour: f64, duration: f64) -> (f64, f64) {
        let (start_bound, _) = self.bounds();
        let start = self.hour_at_offset(
            self.offset_for_hour(finite_or(start_hour, start_bound)),
            self.min_duration(),
        );
        (start, self.resize_end(start, duration, 0.0))
    }

    /// The snap increment in use, after falling back from unusable values
    pub fn snap_increment(&self) -> f64 {
        self.increment()
    }

    /// Pixel offset of an hour from the top of the grid
    pub fn offset_for_hour(&self, hour: f64) -> f64 {
        (hour - self.bounds().0) * self.hour_height()
    }

    /// Height of the whole grid in pixels
    pub fn grid_height_px(&self) -> f64 {
        let (start, end) = self.bounds();
        (end - start) * self.hour_height()
    }

    /// Painted height of a block, never shorter than the minimum block height
    pub fn block_height_px(&self, duration: f64) -> f64 {
        let duration = finite_or(duration, 0.0).max(0.0);
        (duration * self.hour_height()).max(self.config.min_block_height_px)
    }

    /// Scroll offset that puts the default hour near the top of the viewport
    pub fn initial_scroll_offset(&self) -> f64 {
        let target = self.offset_for_hour(self.config.default_scroll_hour)
            - self.config.scroll_anchor_padding_px;
        finite_or(target, 0.0).max(0.0)
    }

    /// Where the scroll view should settle once scrolling stops, if anywhere.
    ///
    /// Returns the default-hour offset when `current_offset` is close to it
    /// but not already there.
    pub fn magnetic_scroll_target(&self, current_offset: f64) -> Option<f64> {
        let target = self.initial_scroll_offset();
        let diff = (current_offset - target).abs();
        (diff > 0.0 && diff < self.config.magnetic_threshold_px).then_some(target)
    }

    // Infinite drags saturate to a whole grid span in that direction
    fn hour_delta(&self, delta_px: f64) -> f64 {
        if delta_px.is_infinite() {
            let (start, end) = self.bounds();
            return (end - start).copysign(delta_px);
        }
        finite_or(delta_px, 0.0) / self.hour_height()
    }

    fn hour_height(&self) -> f64 {
        let height = self.config.hour_height_px;
        if height.is_finite() && height > 0.0 {
            height
        } else {
            GridConfig::default().hour_height_px
        }
    }

    fn increment(&self) -> f64 {
        let increment = self.config.snap_increment_hours;
        if increment.is_finite() && increment > 0.0 {
            increment
        } else {
            GridConfig::default().snap_increment_hours
        }
    }

    fn min_duration(&self) -> f64 {
        let minimum = self.config.min_duration_hours;
        if minimum.is_finite() && minimum > 0.0 {
            minimum
        } else {
            self.increment()
        }
    }

    /// Visible `(start_hour, end_hour)`, falling back to the full day when
    /// the configured range is unusable
    pub fn bounds(&self) -> (f64, f64) {
        let GridConfig {
            start_hour,
            end_hour,
            ..
        } = self.config;
        if start_hour.is_finite() && end_hour.is_finite() && start_hour < end_hour {
            (start_hour, end_hour)
        } else {
            let defaults = GridConfig::default();
            (defaults.start_hour, defaults.end_hour)
        }
    }

    // Clamp into lo..=hi, snap, then clamp again onto the grid lines inside
    // that range. Ranges narrower than one increment resolve to `lo`.
    fn snap_within(&self, raw: f64, lo: f64, hi: f64) -> f64 {
        let increment = self.increment();
        let snapped = snap_to_grid(raw.clamp(lo, hi), increment);

        let grid_lo = (lo / increment - EPSILON).ceil() * increment;
        let grid_hi = (hi / increment + EPSILON).floor() * increment;
        if grid_lo > grid_hi {
            return lo;
        }
        snapped.clamp(grid_lo, grid_hi)
    }
}

impl Default for GridSnapCalculator {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn business_hours() -> GridSnapCalculator {
        GridSnapCalculator::new(GridConfig {
            start_hour: 8.0,
            end_hour: 18.0,
            ..GridConfig::default()
        })
    }

    #[test_case(1.1167, 0.25, 1.0 ; "rounds down to quarter")]
    #[test_case(1.13, 0.25, 1.25 ; "rounds up to quarter")]
    #[test_case(10.5, 0.5, 10.5 ; "already on grid")]
    #[test_case(7.4, 1.0, 7.0 ; "whole hours")]
    #[test_case(3.3, 0.0, 3.3 ; "zero increment is a no-op")]
    #[test_case(3.3, -1.0, 3.3 ; "negative increment is a no-op")]
    fn test_snap_to_grid(value: f64, increment: f64, expected: f64) {
        assert_eq!(snap_to_grid(value, increment), expected);
    }

    #[test]
    fn test_snap_is_idempotent() {
        for raw in [0.1, 1.1167, 7.77, 13.126, 23.9] {
            let once = snap_to_grid(raw, 0.25);
            assert_eq!(snap_to_grid(once, 0.25), once);
        }
    }

    #[test]
    fn test_pixel_67_snaps_to_one_oclock() {
        let calc = GridSnapCalculator::default();
        assert!((calc.raw_hour(67.0) - 1.116_666).abs() < 1e-5);
        assert_eq!(calc.hour_at_offset(67.0, 0.0), 1.0);
    }

    #[test]
    fn test_pointer_below_grid_clamps_to_end() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.hour_at_offset(25.0 * 60.0, 0.0), 24.0);
    }

    #[test]
    fn test_pointer_above_grid_clamps_to_start() {
        let calc = business_hours();
        assert_eq!(calc.hour_at_offset(-300.0, 0.0), 8.0);
    }

    #[test]
    fn test_offsets_are_relative_to_start_hour() {
        let calc = business_hours();
        assert_eq!(calc.hour_at_offset(90.0, 0.0), 9.5);
        assert_eq!(calc.offset_for_hour(9.5), 90.0);
    }

    #[test]
    fn test_minimum_span_reserved_at_end() {
        let calc = business_hours();
        assert_eq!(calc.hour_at_offset(10_000.0, 1.5), 16.5);
    }

    #[test]
    fn test_nan_offset_resolves_to_start() {
        let calc = business_hours();
        assert_eq!(calc.hour_at_offset(f64::NAN, 0.0), 8.0);
        assert_eq!(calc.raw_hour(f64::NAN), 8.0);
    }

    #[test]
    fn test_infinite_offsets_clamp_to_nearest_bound() {
        let calc = business_hours();
        assert_eq!(calc.hour_at_offset(f64::INFINITY, 0.0), 18.0);
        assert_eq!(calc.hour_at_offset(f64::INFINITY, 0.0), calc.hour_at_offset(1e300, 0.0));
        assert_eq!(calc.hour_at_offset(f64::NEG_INFINITY, 0.0), 8.0);
        assert_eq!(calc.start_for_create(f64::INFINITY), 17.75);
    }

    #[test]
    fn test_infinite_resize_delta_saturates() {
        let calc = business_hours();
        assert_eq!(calc.resize_end(9.0, 1.0, f64::INFINITY), 9.0);
        assert_eq!(calc.resize_start(10.0, 1.0, f64::NEG_INFINITY), (8.0, 3.0));
    }

    #[test]
    fn test_fit_range_snaps_and_clamps() {
        let calc = business_hours();
        assert_eq!(calc.fit_range(9.1, 1.05), (9.0, 1.0));
        assert_eq!(calc.fit_range(17.5, 3.0), (17.5, 0.5));
        assert_eq!(calc.fit_range(6.0, 0.0), (8.0, 0.25));
        assert_eq!(calc.fit_range(f64::NAN, 1.0), (8.0, 1.0));
    }

    #[test]
    fn test_start_for_create_leaves_room_for_minimum() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.start_for_create(24.0 * 60.0), 23.75);
        assert_eq!(calc.start_for_create(610.0), 10.25);
    }

    #[test]
    fn test_start_for_move_respects_grab_offset_and_duration() {
        let calc = GridSnapCalculator::default();
        // pointer at 10:40, grabbed 20px below the item's top
        assert_eq!(calc.start_for_move(640.0, 20.0, 1.0), 10.25);
        // a two hour item cannot start after 22:00
        assert_eq!(calc.start_for_move(23.5 * 60.0, 0.0, 2.0), 22.0);
    }

    #[test]
    fn test_resize_end_snaps_and_enforces_minimum() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.resize_end(10.0, 1.0, 31.0), 1.5);
        assert_eq!(calc.resize_end(10.0, 1.0, -500.0), 0.25);
    }

    #[test]
    fn test_resize_end_stops_at_end_bound() {
        let calc = business_hours();
        assert_eq!(calc.resize_end(17.0, 0.5, 600.0), 1.0);
    }

    #[test]
    fn test_resize_start_keeps_end_fixed() {
        let calc = GridSnapCalculator::default();
        let (start, duration) = calc.resize_start(10.0, 1.0, -30.0);
        assert_eq!(start, 9.5);
        assert_eq!(start + duration, 11.0);

        let (start, duration) = calc.resize_start(10.0, 1.0, 500.0);
        assert_eq!(start, 10.75);
        assert_eq!(duration, 0.25);
    }

    #[test]
    fn test_resize_start_clamps_to_start_bound() {
        let calc = business_hours();
        let (start, duration) = calc.resize_start(9.0, 1.0, -600.0);
        assert_eq!(start, 8.0);
        assert_eq!(duration, 2.0);
    }

    #[test]
    fn test_block_height_has_minimum() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.block_height_px(0.0), 20.0);
        assert_eq!(calc.block_height_px(1.5), 90.0);
        assert_eq!(calc.block_height_px(-2.0), 20.0);
    }

    #[test]
    fn test_grid_height_follows_bounds() {
        assert_eq!(GridSnapCalculator::default().grid_height_px(), 1440.0);
        assert_eq!(business_hours().grid_height_px(), 600.0);
    }

    #[test]
    fn test_initial_scroll_offset_sits_above_default_hour() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.initial_scroll_offset(), 465.0);
    }

    #[test]
    fn test_magnetic_scroll_only_within_threshold() {
        let calc = GridSnapCalculator::default();
        assert_eq!(calc.magnetic_scroll_target(480.0), Some(465.0));
        assert_eq!(calc.magnetic_scroll_target(465.0), None);
        assert_eq!(calc.magnetic_scroll_target(600.0), None);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let calc = GridSnapCalculator::new(GridConfig {
            hour_height_px: 0.0,
            snap_increment_hours: f64::NAN,
            start_hour: 20.0,
            end_hour: 4.0,
            ..GridConfig::default()
        });
        assert_eq!(calc.hour_at_offset(67.0, 0.0), 1.0);
    }
}
