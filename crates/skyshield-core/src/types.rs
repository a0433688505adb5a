//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Stable identity of a simulation entity.
///
/// Issued by a session-scoped monotonic allocator and never reused
/// within a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Frame-based simulation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation steps run in the current session.
    pub frame: u64,
    /// Simulated milliseconds elapsed in the current session.
    pub elapsed_ms: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Y coordinate of the ground line that cities and batteries sit on.
    pub fn ground_y(&self) -> f64 {
        (self.height - crate::constants::GROUND_MARGIN).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_VIEWPORT_WIDTH,
            crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

impl SimTime {
    /// Advance by one step of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += delta_ms;
    }
}
