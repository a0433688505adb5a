//! Rocket spawning: a time-budgeted accumulator and the target policy.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use skyshield_core::components::{Battery, City, Rocket};
use skyshield_core::constants::*;
use skyshield_core::geometry::Point;
use skyshield_core::types::{EntityId, Viewport};

use crate::session::Session;
use crate::world_setup;

/// `max(500, 2000 - 100 * level)` milliseconds.
pub fn spawn_interval_ms(level: u32) -> f64 {
    (SPAWN_INTERVAL_BASE_MS - SPAWN_INTERVAL_STEP_MS * level as f64).max(SPAWN_INTERVAL_FLOOR_MS)
}

/// Every live city and battery as `(id, position)`, sorted by id.
pub fn alive_targets(world: &World) -> Vec<(EntityId, Point)> {
    let mut targets: Vec<(EntityId, Point)> = world
        .query::<(&EntityId, &City)>()
        .iter()
        .filter(|(_, (_, city))| city.alive)
        .map(|(_, (id, city))| (*id, city.position))
        .collect();

    targets.extend(
        world
            .query::<(&EntityId, &Battery)>()
            .iter()
            .filter(|(_, (_, battery))| battery.alive)
            .map(|(_, (id, battery))| (*id, battery.position)),
    );

    targets.sort_by_key(|(id, _)| *id);
    targets
}

/// Build a rocket aimed at a uniformly chosen live target, starting at a
/// uniformly chosen point on the top edge. `None` when nothing is alive.
pub fn plan_rocket(
    rng: &mut ChaCha8Rng,
    targets: &[(EntityId, Point)],
    level: u32,
    width: f64,
) -> Option<Rocket> {
    if targets.is_empty() {
        return None;
    }

    let (target_id, target) = targets[rng.gen_range(0..targets.len())];
    let start_x = if width > 0.0 {
        rng.gen_range(0.0..width)
    } else {
        0.0
    };
    let start = Point::new(start_x, 0.0);
    let speed = rng.gen_range(ROCKET_SPEED_MIN..=ROCKET_SPEED_MAX)
        * (1.0 + ROCKET_LEVEL_SPEEDUP * level as f64);

    Some(Rocket {
        start,
        target,
        target_id,
        position: start,
        speed,
        progress: 0.0,
        hit: false,
        is_splitter: false,
    })
}

/// Advance the spawn accumulator and spawn a rocket once it passes the
/// current level's interval.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    viewport: &Viewport,
    delta_ms: f64,
) -> Option<Entity> {
    session.spawn_accumulator_ms += delta_ms;
    if session.spawn_accumulator_ms <= spawn_interval_ms(session.level) {
        return None;
    }
    session.spawn_accumulator_ms = 0.0;

    let targets = alive_targets(world);
    let rocket = plan_rocket(rng, &targets, session.level, viewport.width)?;
    trace!(target = ?rocket.target_id, speed = rocket.speed, "rocket spawned");
    Some(world_setup::spawn_rocket(world, &mut session.ids, rocket))
}
