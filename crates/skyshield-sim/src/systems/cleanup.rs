//! Cleanup system: removes burnt-out explosions and destroyed rockets.

use hecs::{Entity, World};

use skyshield_core::components::{Explosion, Rocket};
use skyshield_core::constants::ROCKET_REMOVAL_PROGRESS;

/// Remove explosions with radius <= 0 and rockets with progress >= 1.5.
/// The rocket threshold is what purges blast-destroyed rockets, which the
/// collision pass parks at progress 2.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.radius <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, rocket) in world.query_mut::<&Rocket>() {
        if rocket.progress >= ROCKET_REMOVAL_PROGRESS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
