//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Fire-and-forget cues for the audio collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A rocket was destroyed by a blast.
    Interception { position: Point },
    /// A rocket reached its target.
    ImpactDamage { position: Point },
}
