//! Interceptor motion. Arrival detonates at the designated point.

use hecs::World;

use skyshield_core::components::Missile;
use skyshield_core::constants::{EXPLOSION_MAX_RADIUS, FRAME_BASELINE_MS};
use skyshield_core::geometry::{lerp_point, Point};

use crate::session::IdAllocator;
use crate::world_setup;

/// Advance missiles by `speed * delta_ms / 16`. Missiles reaching progress 1
/// are removed and leave a standard explosion at their target.
/// Returns the number of detonations.
pub fn run(
    world: &mut World,
    ids: &mut IdAllocator,
    delta_ms: f64,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> u32 {
    let frame_scale = delta_ms / FRAME_BASELINE_MS;
    despawn_buffer.clear();
    let mut detonations: Vec<Point> = Vec::new();

    for (entity, missile) in world.query_mut::<&mut Missile>() {
        missile.progress += missile.speed * frame_scale;
        if missile.progress >= 1.0 {
            detonations.push(missile.target);
            despawn_buffer.push(entity);
        } else {
            missile.position = lerp_point(missile.start, missile.target, missile.progress);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for &point in &detonations {
        world_setup::spawn_explosion(world, ids, point, EXPLOSION_MAX_RADIUS);
    }

    detonations.len() as u32
}
