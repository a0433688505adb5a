//! Entity spawn factories for setting up the simulation world.
//!
//! Lays out cities and batteries for a viewport and creates the transient
//! entities (rockets, missiles, explosions, floating text) with their
//! component bundles.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::geometry::Point;
use skyshield_core::types::Viewport;

use crate::session::IdAllocator;

/// Reset the world for a new session: drop every entity, then lay out
/// cities and batteries for `viewport`.
pub fn setup_session(world: &mut World, ids: &mut IdAllocator, viewport: &Viewport) {
    world.clear();
    for position in city_positions(viewport) {
        spawn_city(world, ids, position);
    }
    for slot in BatterySlot::ALL {
        spawn_battery(world, ids, slot, viewport);
    }
}

/// Cities evenly spaced in eighths of the width, skipping the middle slot
/// that belongs to the center battery.
pub fn city_positions(viewport: &Viewport) -> Vec<Point> {
    let spacing = viewport.width / 8.0;
    let ground = viewport.ground_y();
    CITY_SLOTS
        .iter()
        .map(|slot| Point::new(slot * spacing, ground))
        .collect()
}

pub fn battery_position(slot: BatterySlot, viewport: &Viewport) -> Point {
    Point::new(viewport.width * slot.x_fraction(), viewport.ground_y())
}

pub fn spawn_city(world: &mut World, ids: &mut IdAllocator, position: Point) -> Entity {
    world.spawn((
        ids.next_id(),
        City {
            position,
            alive: true,
        },
    ))
}

pub fn spawn_battery(
    world: &mut World,
    ids: &mut IdAllocator,
    slot: BatterySlot,
    viewport: &Viewport,
) -> Entity {
    let max_ammo = slot.max_ammo();
    world.spawn((
        ids.next_id(),
        Battery {
            position: battery_position(slot, viewport),
            slot,
            ammo: max_ammo,
            max_ammo,
            alive: true,
        },
    ))
}

pub fn spawn_rocket(world: &mut World, ids: &mut IdAllocator, rocket: Rocket) -> Entity {
    world.spawn((ids.next_id(), rocket))
}

/// Spawn an interceptor flying from `origin` to `target`.
pub fn spawn_missile(
    world: &mut World,
    ids: &mut IdAllocator,
    origin: Point,
    target: Point,
) -> Entity {
    world.spawn((
        ids.next_id(),
        Missile {
            start: origin,
            target,
            position: origin,
            speed: MISSILE_SPEED,
            progress: 0.0,
        },
    ))
}

/// Spawn a fresh, growing explosion.
pub fn spawn_explosion(
    world: &mut World,
    ids: &mut IdAllocator,
    center: Point,
    max_radius: f64,
) -> Entity {
    world.spawn((
        ids.next_id(),
        Explosion {
            center,
            radius: EXPLOSION_INITIAL_RADIUS,
            max_radius,
            direction: GrowthDirection::Expanding,
        },
    ))
}

pub fn spawn_floating_text(world: &mut World, ids: &mut IdAllocator, position: Point) -> Entity {
    world.spawn((
        ids.next_id(),
        FloatingText {
            position,
            text: FLOATING_TEXT_CONTENT.to_string(),
            opacity: 1.0,
            life_ms: FLOATING_TEXT_LIFE_MS,
        },
    ))
}
