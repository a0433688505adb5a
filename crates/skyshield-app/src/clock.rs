//! Wall-clock to frame-delta conversion.

use std::time::Instant;

/// Turns successive monotonic instants into frame deltas in milliseconds.
///
/// The first frame after construction or [`FrameClock::reset`] has a zero
/// delta, and every delta is capped at `max_delta_ms`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta_ms: f64,
}

impl FrameClock {
    pub fn new(max_delta_ms: f64) -> Self {
        Self {
            last: None,
            max_delta_ms: max_delta_ms.max(0.0),
        }
    }

    /// Delta since the previous call, in milliseconds.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let delta_ms = match self.last {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f64() * 1000.0,
            None => 0.0,
        };
        self.last = Some(now);
        delta_ms.min(self.max_delta_ms)
    }

    /// Forget the previous instant so the next frame starts from zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
