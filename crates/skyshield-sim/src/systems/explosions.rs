//! Explosion lifecycle and blast-versus-rocket collision.
//!
//! This is where interceptions happen: each explosion grows (or shrinks),
//! then every rocket that is not already hit is tested against it. A hit
//! scores, leaves a floating "+20" and sets off a smaller chained explosion
//! at the rocket's position. Chained explosions are spawned after the pass
//! and only start colliding on the next frame.

use hecs::{Entity, World};
use tracing::debug;

use skyshield_core::components::{Explosion, Rocket};
use skyshield_core::constants::*;
use skyshield_core::enums::GrowthDirection;
use skyshield_core::events::AudioEvent;
use skyshield_core::geometry::{distance, Point};
use skyshield_core::types::EntityId;

use crate::session::Session;
use crate::world_setup;

/// How the collision pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Every explosion was processed.
    Completed,
    /// The victory score was reached. Explosions and rockets after the
    /// deciding hit were left unprocessed for this frame.
    Victory,
}

/// Grow or shrink one explosion by `EXPLOSION_GROWTH_RATE * frame_scale`.
///
/// Growth stops at `max_radius`, where the explosion flips to contracting.
/// Shrinking is unbounded; cleanup removes the explosion once it is <= 0.
pub fn advance_radius(explosion: &mut Explosion, frame_scale: f64) {
    explosion.radius += explosion.direction.sign() * EXPLOSION_GROWTH_RATE * frame_scale;
    if explosion.direction == GrowthDirection::Expanding && explosion.radius >= explosion.max_radius
    {
        explosion.radius = explosion.max_radius;
        explosion.direction = GrowthDirection::Contracting;
    }
}

/// Strict contact test: `distance < radius + ROCKET_COLLISION_RADIUS`.
pub fn in_blast(rocket_position: Point, center: Point, radius: f64) -> bool {
    distance(rocket_position, center) < radius + ROCKET_COLLISION_RADIUS
}

/// Run the explosion lifecycle and collision pass for one frame.
///
/// Explosions and rockets are visited in id order. Returns
/// `CollisionOutcome::Victory` as soon as the score reaches the victory
/// threshold.
pub fn run(
    world: &mut World,
    session: &mut Session,
    delta_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> CollisionOutcome {
    let frame_scale = delta_ms / FRAME_BASELINE_MS;

    let blasts = sorted_entities::<Explosion>(world);
    let rockets = sorted_entities::<Rocket>(world);

    let mut interceptions: Vec<Point> = Vec::new();
    let mut outcome = CollisionOutcome::Completed;

    'blasts: for &blast_entity in &blasts {
        let (center, radius) = {
            let Ok(mut explosion) = world.get::<&mut Explosion>(blast_entity) else {
                continue;
            };
            advance_radius(&mut explosion, frame_scale);
            (explosion.center, explosion.radius)
        };

        for &rocket_entity in &rockets {
            let Ok(mut rocket) = world.get::<&mut Rocket>(rocket_entity) else {
                continue;
            };
            if rocket.hit || !in_blast(rocket.position, center, radius) {
                continue;
            }

            rocket.hit = true;
            rocket.progress = ROCKET_DESTROYED_PROGRESS;
            session.award_intercept();
            interceptions.push(rocket.position);
            audio_events.push(AudioEvent::Interception {
                position: rocket.position,
            });

            if session.victory_reached() {
                debug!(score = session.score, "victory score reached mid-pass");
                outcome = CollisionOutcome::Victory;
                break 'blasts;
            }
        }
    }

    for position in interceptions {
        world_setup::spawn_floating_text(world, &mut session.ids, position);
        world_setup::spawn_explosion(
            world,
            &mut session.ids,
            position,
            EXPLOSION_MAX_RADIUS * CHAIN_EXPLOSION_FACTOR,
        );
    }

    outcome
}

/// Entities carrying component `T`, ordered by their `EntityId`.
fn sorted_entities<T: hecs::Component>(world: &World) -> Vec<Entity> {
    let mut entries: Vec<(EntityId, Entity)> = world
        .query::<(&EntityId, &T)>()
        .iter()
        .map(|(entity, (id, _))| (*id, entity))
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    entries.into_iter().map(|(_, entity)| entity).collect()
}
