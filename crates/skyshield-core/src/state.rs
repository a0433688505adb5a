//! Game state snapshot: the read-only projection handed to the renderer
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::geometry::Point;
use crate::types::{EntityId, SimTime, Viewport};

/// Complete visible state after a tick. Every list is sorted by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub state: SessionState,
    pub score: u32,
    pub level: u32,
    pub viewport: Viewport,
    pub rockets: Vec<RocketView>,
    pub missiles: Vec<MissileView>,
    pub explosions: Vec<ExplosionView>,
    pub cities: Vec<CityView>,
    pub batteries: Vec<BatteryView>,
    pub floating_texts: Vec<FloatingTextView>,
    pub audio_events: Vec<AudioEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub id: EntityId,
    pub start: Point,
    pub position: Point,
    pub target: Point,
    pub progress: f64,
    pub hit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: EntityId,
    pub start: Point,
    pub position: Point,
    pub target: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: EntityId,
    pub center: Point,
    pub radius: f64,
    pub max_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: EntityId,
    pub position: Point,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub id: EntityId,
    pub slot: BatterySlot,
    pub position: Point,
    pub ammo: u32,
    pub max_ammo: u32,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingTextView {
    pub id: EntityId,
    pub position: Point,
    pub text: String,
    pub opacity: f64,
}

impl GameStateSnapshot {
    /// Batteries still standing.
    pub fn live_batteries(&self) -> usize {
        self.batteries.iter().filter(|b| b.alive).count()
    }

    /// Cities still standing.
    pub fn live_cities(&self) -> usize {
        self.cities.iter().filter(|c| c.alive).count()
    }

    /// Total ammo across live batteries.
    pub fn total_ammo(&self) -> u32 {
        self.batteries.iter().filter(|b| b.alive).map(|b| b.ammo).sum()
    }
}
