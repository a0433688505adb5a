//! Floating score text: drift upward, fade, expire.

use hecs::{Entity, World};

use skyshield_core::components::FloatingText;
use skyshield_core::constants::{FLOATING_TEXT_DRIFT, FLOATING_TEXT_LIFE_MS, FRAME_BASELINE_MS};

pub fn run(world: &mut World, delta_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    let frame_scale = delta_ms / FRAME_BASELINE_MS;
    despawn_buffer.clear();

    for (entity, text) in world.query_mut::<&mut FloatingText>() {
        text.life_ms -= delta_ms;
        text.position.y -= FLOATING_TEXT_DRIFT * frame_scale;
        text.opacity = (text.life_ms / FLOATING_TEXT_LIFE_MS).max(0.0);
        if text.life_ms <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
