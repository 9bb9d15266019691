// Magnetic scroll
//
// Tracks the time grid's scroll offset between frames. Once scrolling has
// been still for SETTLE_DELAY and the offset sits near the default hour,
// the view snaps onto it.

use crate::services::grid_snap::GridSnapCalculator;

/// How long the offset must stay put before snapping, in seconds
pub const SETTLE_DELAY: f64 = 0.15;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Offset to apply on the next frame
    pub pending: Option<f32>,
    last_offset: Option<f32>,
    last_change: f64,
    settled: bool,
}

impl ScrollState {
    /// Start at the default hour
    pub fn initial(calc: &GridSnapCalculator) -> Self {
        Self {
            pending: Some(calc.initial_scroll_offset() as f32),
            ..Self::default()
        }
    }

    /// Ask the view to scroll back to the default hour
    pub fn reset(&mut self, calc: &GridSnapCalculator) {
        self.pending = Some(calc.initial_scroll_offset() as f32);
        self.settled = false;
    }

    /// Take the offset to apply this frame, if any
    pub fn take_pending(&mut self) -> Option<f32> {
        self.pending.take()
    }

    /// Record the offset the scroll area ended the frame at.
    ///
    /// `now` is the frame time in seconds. Returns the snap target once the
    /// offset has settled, at most once per stop. Returns `None` while a
    /// drag or resize is active.
    pub fn observe(
        &mut self,
        offset: f32,
        now: f64,
        gesture_active: bool,
        calc: &GridSnapCalculator,
    ) -> Option<f32> {
        let moved = self
            .last_offset
            .map_or(true, |last| (last - offset).abs() > f32::EPSILON);
        if moved {
            self.last_offset = Some(offset);
            self.last_change = now;
            self.settled = false;
            return None;
        }

        if self.settled || gesture_active || now - self.last_change < SETTLE_DELAY {
            return None;
        }

        self.settled = true;
        let target = calc.magnetic_scroll_target(offset as f64)? as f32;
        log::debug!("Snapping scroll from {:.1} to {:.1}", offset, target);
        self.pending = Some(target);
        Some(target)
    }

    /// True until the current stop has been handled
    pub fn is_waiting(&self) -> bool {
        !self.settled && self.last_offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_scroll_targets_default_hour() {
        let calc = GridSnapCalculator::default();
        let mut state = ScrollState::initial(&calc);
        assert_eq!(state.take_pending(), Some(465.0));
        assert_eq!(state.take_pending(), None);
    }

    #[test]
    fn test_snaps_after_settle_delay() {
        let calc = GridSnapCalculator::default();
        let mut state = ScrollState::default();

        assert_eq!(state.observe(480.0, 0.0, false, &calc), None);
        assert_eq!(state.observe(480.0, 0.1, false, &calc), None);
        assert_eq!(state.observe(480.0, 0.2, false, &calc), Some(465.0));
        assert_eq!(state.take_pending(), Some(465.0));

        // only once per stop
        assert_eq!(state.observe(480.0, 0.3, false, &calc), None);
    }

    #[test]
    fn test_far_offset_does_not_snap() {
        let calc = GridSnapCalculator::default();
        let mut state = ScrollState::default();

        state.observe(900.0, 0.0, false, &calc);
        assert_eq!(state.observe(900.0, 1.0, false, &calc), None);
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_no_snap_during_gesture() {
        let calc = GridSnapCalculator::default();
        let mut state = ScrollState::default();

        state.observe(470.0, 0.0, true, &calc);
        assert_eq!(state.observe(470.0, 1.0, true, &calc), None);
        assert_eq!(state.observe(470.0, 1.1, false, &calc), Some(465.0));
    }

    #[test]
    fn test_movement_restarts_the_timer() {
        let calc = GridSnapCalculator::default();
        let mut state = ScrollState::default();

        state.observe(470.0, 0.0, false, &calc);
        state.observe(475.0, 0.14, false, &calc);
        assert_eq!(state.observe(475.0, 0.2, false, &calc), None);
        assert_eq!(state.observe(475.0, 0.3, false, &calc), Some(465.0));
    }
}
