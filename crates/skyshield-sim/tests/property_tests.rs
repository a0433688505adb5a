//! Property tests over the public simulation systems.
//!
//! These drive the systems directly on a hecs world, or the engine through
//! its command queue, with randomized inputs.

use proptest::prelude::*;

use skyshield_sim::core::commands::PlayerCommand;
use skyshield_sim::core::components::{Explosion, Rocket};
use skyshield_sim::core::constants::*;
use skyshield_sim::core::enums::{GrowthDirection, SessionState};
use skyshield_sim::core::geometry::{distance, Point};
use skyshield_sim::core::types::{EntityId, Viewport};
use skyshield_sim::hecs::World;
use skyshield_sim::session::{IdAllocator, Session};
use skyshield_sim::systems::{cleanup, explosions, rockets};
use skyshield_sim::world_setup;
use skyshield_sim::{SimConfig, SimulationEngine};

fn coord() -> impl Strategy<Value = f64> {
    0.0..800.0f64
}

proptest! {
    /// A moving rocket is always somewhere on its start-target segment.
    #[test]
    fn prop_rocket_stays_on_segment(
        sx in coord(), tx in coord(), ty in 100.0..600.0f64,
        speed in ROCKET_SPEED_MIN..ROCKET_SPEED_MAX,
        deltas in prop::collection::vec(0.0..100.0f64, 1..50),
    ) {
        let mut world = World::new();
        let mut ids = IdAllocator::default();
        let start = Point::new(sx, 0.0);
        let target = Point::new(tx, ty);
        world_setup::spawn_rocket(&mut world, &mut ids, Rocket {
            start,
            target,
            target_id: EntityId(999),
            position: start,
            speed,
            progress: 0.0,
            hit: false,
            is_splitter: false,
        });

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        for delta in deltas {
            rockets::run(&mut world, &mut ids, delta, &mut events, &mut buffer);
            for (_, rocket) in world.query_mut::<&Rocket>() {
                prop_assert!(rocket.progress < 1.0);
                let along = distance(start, rocket.position) + distance(rocket.position, target);
                prop_assert!((along - distance(start, target)).abs() < 1e-6);
            }
        }
    }

    /// A rocket is intercepted exactly when it is strictly inside the
    /// blast plus the rocket's collision radius.
    #[test]
    fn prop_collision_iff_within_reach(
        cx in coord(), cy in coord(),
        rx in coord(), ry in coord(),
        radius in 0.0..EXPLOSION_MAX_RADIUS,
    ) {
        let mut world = World::new();
        let mut ids = IdAllocator::default();
        let mut session = Session::default();
        let center = Point::new(cx, cy);
        let at = Point::new(rx, ry);

        let blast = world_setup::spawn_explosion(&mut world, &mut ids, center, EXPLOSION_MAX_RADIUS);
        world.get::<&mut Explosion>(blast).unwrap().radius = radius;
        let rocket = world_setup::spawn_rocket(&mut world, &mut ids, Rocket {
            start: at,
            target: at,
            target_id: EntityId(999),
            position: at,
            speed: 0.0,
            progress: 0.5,
            hit: false,
            is_splitter: false,
        });

        let mut events = Vec::new();
        // Zero delta keeps the radius where it was placed.
        explosions::run(&mut world, &mut session, 0.0, &mut events);

        let expected = distance(at, center) < radius + ROCKET_COLLISION_RADIUS;
        let hit = world.get::<&Rocket>(rocket).unwrap().hit;
        prop_assert_eq!(hit, expected);
        prop_assert_eq!(session.score, if expected { POINTS_PER_INTERCEPT } else { 0 });
    }

    /// After cleanup, no explosion with a non-positive radius survives.
    #[test]
    fn prop_cleanup_leaves_positive_radii(
        deltas in prop::collection::vec(0.0..100.0f64, 1..200),
    ) {
        let mut world = World::new();
        let mut ids = IdAllocator::default();
        let mut session = Session::default();
        world_setup::spawn_explosion(&mut world, &mut ids, Point::new(100.0, 100.0), EXPLOSION_MAX_RADIUS);
        world_setup::spawn_explosion(&mut world, &mut ids, Point::new(300.0, 100.0), 40.0);

        let mut events = Vec::new();
        let mut buffer = Vec::new();
        for delta in deltas {
            explosions::run(&mut world, &mut session, delta, &mut events);
            cleanup::run(&mut world, &mut buffer);
            for (_, explosion) in world.query_mut::<&Explosion>() {
                prop_assert!(explosion.radius > 0.0);
                prop_assert!(explosion.radius <= explosion.max_radius);
                if explosion.direction == GrowthDirection::Expanding {
                    prop_assert!(explosion.radius < explosion.max_radius);
                }
            }
        }
    }

    /// Every missile in flight was paid for with exactly one round.
    #[test]
    fn prop_ammo_is_conserved(
        shots in prop::collection::vec((coord(), coord()), 0..200),
    ) {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::Start);
        engine.tick(0.0);

        let fired = shots.len().min(160);
        engine.queue_commands(shots.into_iter().map(|(x, y)| PlayerCommand::Fire { x, y }));
        let snap = engine.tick(0.0);

        prop_assert_eq!(snap.missiles.len(), fired);
        prop_assert_eq!(snap.total_ammo() as usize + fired, 160);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Score moves in whole interceptions and the level tracks it.
    #[test]
    fn prop_score_and_level_stay_consistent(
        seed in any::<u64>(),
        aim in prop::collection::vec((coord(), 50.0..500.0f64), 1..40),
    ) {
        let mut engine = SimulationEngine::new(SimConfig { seed, ..Default::default() });
        engine.queue_command(PlayerCommand::Start);

        let mut previous_score = 0;
        for frame in 0..3_000usize {
            if frame % 25 == 0 {
                let (x, y) = aim[(frame / 25) % aim.len()];
                engine.queue_command(PlayerCommand::Fire { x, y });
            }
            let snap = engine.tick(16.0);
            prop_assert_eq!(snap.score % POINTS_PER_INTERCEPT, 0);
            prop_assert!(snap.score >= previous_score);
            if snap.state == SessionState::Playing {
                prop_assert_eq!(snap.level, snap.score / POINTS_PER_LEVEL + 1);
            }
            previous_score = snap.score;
        }
    }
}

#[test]
fn test_resized_layout_scales_with_viewport() {
    let mut world = World::new();
    let mut ids = IdAllocator::default();
    let viewport = Viewport::new(1000.0, 500.0);
    world_setup::setup_session(&mut world, &mut ids, &viewport);

    let positions = world_setup::city_positions(&viewport);
    assert_eq!(positions.len(), CITY_COUNT);
    assert!(positions.iter().all(|p| p.y == 460.0));
    assert_eq!(positions[2].x, 375.0);
    assert_eq!(positions[3].x, 625.0);
}
