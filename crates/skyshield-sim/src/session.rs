//! Session state machine and per-session counters.

use tracing::{debug, info};

use skyshield_core::constants::*;
use skyshield_core::enums::SessionState;
use skyshield_core::types::EntityId;

/// Monotonic id source. Reset at every session initialization.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Coarse session state plus everything that resets with it.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    pub score: u32,
    pub level: u32,
    /// Time accumulated toward the next rocket spawn.
    pub spawn_accumulator_ms: f64,
    pub ids: IdAllocator,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: SessionState::Menu,
            score: 0,
            level: 1,
            spawn_accumulator_ms: 0.0,
            ids: IdAllocator::default(),
        }
    }
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Move to `to` if the state machine allows it. Returns whether it moved.
    pub fn transition(&mut self, to: SessionState) -> bool {
        if !self.state.can_transition(to) {
            debug!(from = ?self.state, to = ?to, "session transition rejected");
            return false;
        }
        if self.state != to {
            info!(from = ?self.state, to = ?to, score = self.score, "session transition");
        }
        self.state = to;
        true
    }

    /// Score, level, spawn accumulator and ids back to their initial values.
    pub fn reset_counters(&mut self) {
        self.score = 0;
        self.level = 1;
        self.spawn_accumulator_ms = 0.0;
        self.ids.reset();
    }

    /// Add points for an interception.
    pub fn award_intercept(&mut self) {
        self.score += POINTS_PER_INTERCEPT;
    }

    pub fn victory_reached(&self) -> bool {
        self.score >= VICTORY_SCORE
    }

    /// Recompute the level from the score. Returns true when it went up.
    pub fn update_level(&mut self) -> bool {
        let level = level_for_score(self.score);
        if level > self.level {
            info!(level, score = self.score, "level up");
            self.level = level;
            return true;
        }
        false
    }
}

/// `floor(score / 200) + 1`.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}
