//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order and produces `GameStateSnapshot`s.
//! Completely headless, so every rule can be exercised from plain tests.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::constants::DEFAULT_MAX_FRAME_DELTA_MS;
use skyshield_core::enums::SessionState;
use skyshield_core::events::AudioEvent;
use skyshield_core::geometry::Point;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{SimTime, Viewport};

use crate::session::Session;
use crate::systems;
use crate::systems::explosions::CollisionOutcome;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same run.
    pub seed: u64,
    /// Initial viewport used to lay out the defenders.
    pub viewport: Viewport,
    /// Upper bound applied to every frame delta.
    pub max_frame_delta_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            max_frame_delta_ms: DEFAULT_MAX_FRAME_DELTA_MS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    session: Session,
    viewport: Viewport,
    max_frame_delta_ms: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new engine in the Menu state with defenders laid out for
    /// the configured viewport.
    pub fn new(config: SimConfig) -> Self {
        let viewport = if config.viewport.is_usable() {
            config.viewport
        } else {
            Viewport::default()
        };
        let mut session = Session::default();
        let mut world = World::new();
        world_setup::setup_session(&mut world, &mut session.ids, &viewport);

        Self {
            world,
            time: SimTime::default(),
            session,
            viewport,
            max_frame_delta_ms: config.max_frame_delta_ms.max(0.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, advance the simulation by `delta_ms` when
    /// Playing and return the resulting snapshot.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.session.state() == SessionState::Playing {
            let delta_ms = self.sanitize_delta(delta_ms);
            self.run_systems(delta_ms);
            self.time.advance(delta_ms);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.session,
            &self.viewport,
            audio_events,
        )
    }

    /// Get the current session state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Get the session counters.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage entities directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable session access for tests that stage scores.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Spawn a hand-built rocket with a fresh id.
    #[cfg(test)]
    pub fn stage_rocket(&mut self, rocket: skyshield_core::components::Rocket) -> hecs::Entity {
        world_setup::spawn_rocket(&mut self.world, &mut self.session.ids, rocket)
    }

    /// Spawn a fresh explosion with a fresh id.
    #[cfg(test)]
    pub fn stage_explosion(&mut self, center: Point, max_radius: f64) -> hecs::Entity {
        world_setup::spawn_explosion(&mut self.world, &mut self.session.ids, center, max_radius)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.session.state() == SessionState::Menu {
                    self.initialize_session();
                }
            }
            PlayerCommand::Restart => {
                if self.session.state().is_terminal() {
                    self.initialize_session();
                }
            }
            PlayerCommand::Fire { x, y } => {
                if self.session.state() != SessionState::Playing {
                    return;
                }
                if !x.is_finite() || !y.is_finite() {
                    debug!(x, y, "ignoring fire at non-finite point");
                    return;
                }
                systems::fire_control::fire(
                    &mut self.world,
                    &mut self.session.ids,
                    Point::new(x, y),
                );
            }
            PlayerCommand::Resize { width, height } => {
                let viewport = Viewport::new(width, height);
                if !viewport.is_usable() {
                    debug!(width, height, "ignoring unusable viewport");
                    return;
                }
                self.viewport = viewport;
                if self.session.state() == SessionState::Menu {
                    self.session.reset_counters();
                    world_setup::setup_session(
                        &mut self.world,
                        &mut self.session.ids,
                        &self.viewport,
                    );
                    self.session.transition(SessionState::Menu);
                }
            }
        }
    }

    /// Full reset for a new round, then enter Playing.
    fn initialize_session(&mut self) {
        self.session.reset_counters();
        world_setup::setup_session(
            &mut self.world,
            &mut self.session.ids,
            &self.viewport,
        );
        self.time = SimTime::default();
        self.audio_events.clear();
        self.despawn_buffer.clear();
        if self.session.transition(SessionState::Playing) {
            info!(
                width = self.viewport.width,
                height = self.viewport.height,
                "session initialized"
            );
        }
    }

    /// Non-finite or negative deltas count as zero; large ones are clamped.
    fn sanitize_delta(&self, delta_ms: f64) -> f64 {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return 0.0;
        }
        delta_ms.min(self.max_frame_delta_ms)
    }

    /// Run all systems in order for one step.
    fn run_systems(&mut self, delta_ms: f64) {
        // 1. Spawn accounting
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.viewport,
            delta_ms,
        );

        // 2. Rocket motion and impacts
        systems::rockets::run(
            &mut self.world,
            &mut self.session.ids,
            delta_ms,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );

        // 3. Missile motion and detonation
        systems::missiles::run(
            &mut self.world,
            &mut self.session.ids,
            delta_ms,
            &mut self.despawn_buffer,
        );

        // 4. Explosions and interceptions. Victory ends the step.
        let outcome = systems::explosions::run(
            &mut self.world,
            &mut self.session,
            delta_ms,
            &mut self.audio_events,
        );
        if outcome == CollisionOutcome::Victory {
            self.session.transition(SessionState::Victory);
            return;
        }

        // 5. Post-collision cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 6. Floating text
        systems::floating_text::run(&mut self.world, delta_ms, &mut self.despawn_buffer);

        // 7. Loss check
        if systems::progression::all_batteries_destroyed(&self.world) {
            self.session.transition(SessionState::GameOver);
            return;
        }

        // 8. Level progression
        self.session.update_level();
    }
}
