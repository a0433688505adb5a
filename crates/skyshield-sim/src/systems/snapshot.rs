//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::events::AudioEvent;
use skyshield_core::state::*;
use skyshield_core::types::{EntityId, SimTime, Viewport};

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &Session,
    viewport: &Viewport,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        state: session.state(),
        score: session.score,
        level: session.level,
        viewport: *viewport,
        rockets: build_rockets(world),
        missiles: build_missiles(world),
        explosions: build_explosions(world),
        cities: build_cities(world),
        batteries: build_batteries(world),
        floating_texts: build_floating_texts(world),
        audio_events,
    }
}

fn build_rockets(world: &World) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = world
        .query::<(&EntityId, &Rocket)>()
        .iter()
        .map(|(_, (id, rocket))| RocketView {
            id: *id,
            start: rocket.start,
            position: rocket.position,
            target: rocket.target,
            progress: rocket.progress,
            hit: rocket.hit,
        })
        .collect();
    rockets.sort_by_key(|r| r.id);
    rockets
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&EntityId, &Missile)>()
        .iter()
        .map(|(_, (id, missile))| MissileView {
            id: *id,
            start: missile.start,
            position: missile.position,
            target: missile.target,
        })
        .collect();
    missiles.sort_by_key(|m| m.id);
    missiles
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&EntityId, &Explosion)>()
        .iter()
        .map(|(_, (id, explosion))| ExplosionView {
            id: *id,
            center: explosion.center,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
        })
        .collect();
    explosions.sort_by_key(|e| e.id);
    explosions
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&EntityId, &City)>()
        .iter()
        .map(|(_, (id, city))| CityView {
            id: *id,
            position: city.position,
            alive: city.alive,
        })
        .collect();
    cities.sort_by_key(|c| c.id);
    cities
}

fn build_batteries(world: &World) -> Vec<BatteryView> {
    let mut batteries: Vec<BatteryView> = world
        .query::<(&EntityId, &Battery)>()
        .iter()
        .map(|(_, (id, battery))| BatteryView {
            id: *id,
            slot: battery.slot,
            position: battery.position,
            ammo: battery.ammo,
            max_ammo: battery.max_ammo,
            alive: battery.alive,
        })
        .collect();
    batteries.sort_by_key(|b| b.id);
    batteries
}

fn build_floating_texts(world: &World) -> Vec<FloatingTextView> {
    let mut texts: Vec<FloatingTextView> = world
        .query::<(&EntityId, &FloatingText)>()
        .iter()
        .map(|(_, (id, text))| FloatingTextView {
            id: *id,
            position: text.position,
            text: text.text.clone(),
            opacity: text.opacity,
        })
        .collect();
    texts.sort_by_key(|t| t.id);
    texts
}
