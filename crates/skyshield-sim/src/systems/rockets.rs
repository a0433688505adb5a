//! Rocket motion and impact resolution.

use hecs::World;

use skyshield_core::components::{Battery, City, Rocket};
use skyshield_core::constants::EXPLOSION_MAX_RADIUS;
use skyshield_core::events::AudioEvent;
use skyshield_core::geometry::{lerp_point, Point};
use skyshield_core::types::EntityId;

use crate::session::IdAllocator;
use crate::world_setup;

/// Advance every rocket by `speed * delta_ms` (raw milliseconds, no frame
/// normalization) and resolve arrivals.
///
/// A rocket that is not already hit and reaches progress 1 impacts: an
/// explosion spawns at its target and the targeted structure is
/// deactivated. Every rocket at progress >= 1 is then removed.
/// Returns the number of impacts.
pub fn run(
    world: &mut World,
    ids: &mut IdAllocator,
    delta_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> u32 {
    despawn_buffer.clear();
    let mut impacts: Vec<(EntityId, Point)> = Vec::new();

    for (entity, rocket) in world.query_mut::<&mut Rocket>() {
        rocket.progress += rocket.speed * delta_ms;
        rocket.position = lerp_point(rocket.start, rocket.target, rocket.progress.min(1.0));

        if rocket.progress >= 1.0 {
            if !rocket.hit {
                impacts.push((rocket.target_id, rocket.target));
            }
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for &(target_id, point) in &impacts {
        audio_events.push(AudioEvent::ImpactDamage { position: point });
        world_setup::spawn_explosion(world, ids, point, EXPLOSION_MAX_RADIUS);
        deactivate_structure(world, target_id);
    }

    impacts.len() as u32
}

/// Mark the city or battery with `target_id` as destroyed.
/// Returns false when no structure carries that id.
pub fn deactivate_structure(world: &mut World, target_id: EntityId) -> bool {
    for (_entity, (id, city)) in world.query_mut::<(&EntityId, &mut City)>() {
        if *id == target_id {
            city.alive = false;
            return true;
        }
    }
    for (_entity, (id, battery)) in world.query_mut::<(&EntityId, &mut Battery)>() {
        if *id == target_id {
            battery.alive = false;
            return true;
        }
    }
    false
}
