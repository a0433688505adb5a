//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::geometry::Point;
use crate::types::EntityId;

/// Enemy projectile descending from the top edge toward a defended structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub start: Point,
    /// Target point, copied from the structure at spawn time.
    pub target: Point,
    /// Identity of the targeted city or battery. Impact resolves the
    /// structure through this id, not through coordinates.
    pub target_id: EntityId,
    /// Interpolated position, always `lerp(start, target, min(progress, 1))`.
    pub position: Point,
    /// Progress units per millisecond.
    pub speed: f64,
    /// 0 at spawn, 1 on arrival. Destroyed rockets are parked at 2.
    pub progress: f64,
    /// Set once the rocket is caught by a blast.
    pub hit: bool,
    /// Reserved. Always false; nothing reads it yet.
    pub is_splitter: bool,
}

/// Player-fired interceptor travelling from a battery to the designated point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub start: Point,
    pub target: Point,
    pub position: Point,
    /// Progress units per baseline frame.
    pub speed: f64,
    pub progress: f64,
}

/// Expanding-then-contracting blast zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Point,
    pub radius: f64,
    pub max_radius: f64,
    pub direction: GrowthDirection,
}

/// Passive defended structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub position: Point,
    pub alive: bool,
}

/// Defense installation that fires missiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    pub position: Point,
    pub slot: BatterySlot,
    pub ammo: u32,
    pub max_ammo: u32,
    pub alive: bool,
}

/// Score acknowledgment that drifts upward and fades out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub position: Point,
    pub text: String,
    /// `life_ms / FLOATING_TEXT_LIFE_MS`.
    pub opacity: f64,
    pub life_ms: f64,
}
