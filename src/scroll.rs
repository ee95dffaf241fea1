//! Mouse wheel debouncing for the picker.
//!
//! Trackpads and precision mice emit bursts of wheel events. Ticks are
//! accumulated over a short window and converted into whole item steps, so a
//! single flick moves the picker by a predictable amount instead of racing to
//! the end of the list.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut scroll_helper = ScrollHelper::from_config(&config.wheel);
//!
//! // In event loop:
//! if let Some(steps) = scroll_helper.accumulate(1) {
//!     app.picker.nudge(steps);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::config::WheelConfig;

/// Converts wheel ticks into picker steps.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    /// Ticks accumulated since the last emitted step
    accumulated_delta: i32,
    /// Time of last wheel event
    last_event: Option<Instant>,
    /// Debounce duration in milliseconds
    debounce_ms: u64,
    /// Ticks per item step
    threshold: i32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::from_config(&WheelConfig::default())
    }
}

impl ScrollHelper {
    /// Create a new scroll helper with specified debounce time and threshold.
    ///
    /// # Arguments
    /// * `debounce_ms` - Time window for accumulating wheel ticks (milliseconds)
    /// * `threshold` - Ticks needed for one item step (values below 1 act as 1)
    pub fn new(debounce_ms: u64, threshold: i32) -> Self {
        Self {
            accumulated_delta: 0,
            last_event: None,
            debounce_ms,
            threshold: threshold.max(1),
        }
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self::new(config.debounce_ms, config.threshold)
    }

    /// Accumulate wheel ticks and return the whole item steps they add up to.
    ///
    /// Ticks that arrive after the debounce window start a fresh accumulation.
    /// Leftover ticks below the threshold are kept for the next event.
    pub fn accumulate(&mut self, delta: i32) -> Option<i32> {
        self.accumulate_at(delta, Instant::now())
    }

    fn accumulate_at(&mut self, delta: i32, now: Instant) -> Option<i32> {
        let fresh = match self.last_event {
            Some(last) => now.duration_since(last) > Duration::from_millis(self.debounce_ms),
            None => true,
        };
        // A reversed direction also discards the stale remainder
        if fresh || delta.signum() != self.accumulated_delta.signum() {
            self.accumulated_delta = delta;
        } else {
            self.accumulated_delta += delta;
        }

        self.last_event = Some(now);

        let steps = self.accumulated_delta / self.threshold;
        if steps == 0 {
            return None;
        }
        self.accumulated_delta -= steps * self.threshold;
        Some(steps)
    }

    /// Reset the scroll helper state.
    pub fn reset(&mut self) {
        self.accumulated_delta = 0;
        self.last_event = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_within_debounce() {
        let mut helper = ScrollHelper::new(100, 3);
        let start = Instant::now();

        assert!(helper.accumulate_at(1, start).is_none());
        assert!(helper.accumulate_at(1, start + Duration::from_millis(10)).is_none());

        // Third tick completes one step
        assert_eq!(helper.accumulate_at(1, start + Duration::from_millis(20)), Some(1));
    }

    #[test]
    fn test_accumulate_after_debounce() {
        let mut helper = ScrollHelper::new(10, 2);
        let start = Instant::now();

        assert!(helper.accumulate_at(1, start).is_none());

        // Window expired, the earlier tick is dropped
        assert!(helper.accumulate_at(1, start + Duration::from_millis(20)).is_none());
        assert_eq!(helper.accumulate_at(1, start + Duration::from_millis(25)), Some(1));
    }

    #[test]
    fn test_negative_delta() {
        let mut helper = ScrollHelper::new(100, 2);
        let start = Instant::now();

        assert!(helper.accumulate_at(-1, start).is_none());
        assert_eq!(helper.accumulate_at(-1, start), Some(-1));
    }

    #[test]
    fn test_direction_change_discards_remainder() {
        let mut helper = ScrollHelper::new(100, 2);
        let start = Instant::now();

        assert!(helper.accumulate_at(1, start).is_none());
        assert!(helper.accumulate_at(-1, start).is_none());
        assert_eq!(helper.accumulate_at(-1, start), Some(-1));
    }

    #[test]
    fn test_default_threshold_steps_every_tick() {
        let mut helper = ScrollHelper::default();
        assert_eq!(helper.accumulate(1), Some(1));
        assert_eq!(helper.accumulate(1), Some(1));
        helper.reset();
        assert_eq!(helper.accumulate(-1), Some(-1));
    }
}
