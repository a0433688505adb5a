//! Types shared between the host and the game loop thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use skyshield_core::commands::PlayerCommand;
use skyshield_sim::SimConfig;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Game loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Target frames per second.
    pub frame_rate_hz: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate_hz: 60,
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one frame. A zero rate falls back to 60 Hz.
    pub fn frame_duration(&self) -> Duration {
        let hz = if self.frame_rate_hz == 0 {
            60
        } else {
            self.frame_rate_hz
        };
        Duration::from_nanos(1_000_000_000 / hz as u64)
    }
}
