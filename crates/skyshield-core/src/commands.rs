//! Player commands sent from the input source to the simulation.
//!
//! Commands are validated against the session state and queued for
//! processing at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the menu and begin a session.
    Start,
    /// Begin a fresh session after game over or victory.
    Restart,
    /// Fire an interceptor at a viewport point.
    Fire { x: f64, y: f64 },
    /// The viewport changed size.
    Resize { width: f64, height: f64 },
}
