//! Scripted players for headless sessions.

use tracing::{debug, info};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::enums::SessionState;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::{SimConfig, SimulationEngine};

/// A player that reads each snapshot and may answer with a command.
pub trait Autopilot {
    fn id(&self) -> &'static str;
    fn reset(&mut self);
    fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand>;
}

/// Fires at the lowest (closest to the ground) incoming rocket, at most
/// once every `fire_every` frames.
#[derive(Debug, Clone)]
pub struct LowestRocketPilot {
    fire_every: u32,
    cooldown: u32,
}

impl LowestRocketPilot {
    pub fn new(fire_every: u32) -> Self {
        Self {
            fire_every: fire_every.max(1),
            cooldown: 0,
        }
    }
}

impl Default for LowestRocketPilot {
    fn default() -> Self {
        Self::new(12)
    }
}

impl Autopilot for LowestRocketPilot {
    fn id(&self) -> &'static str {
        "lowest-rocket"
    }

    fn reset(&mut self) {
        self.cooldown = 0;
    }

    fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.state != SessionState::Playing {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let lowest = snapshot
            .rockets
            .iter()
            .filter(|rocket| !rocket.hit)
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        self.cooldown = self.fire_every - 1;
        Some(PlayerCommand::Fire {
            x: lowest.position.x,
            y: lowest.position.y,
        })
    }
}

/// Result of a headless run.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub frames_run: u64,
    pub final_snapshot: GameStateSnapshot,
}

/// Start a session and let `pilot` play it for at most `max_frames` fixed
/// frames of `frame_ms`. Stops early when the session ends.
pub fn run_session(
    config: SimConfig,
    pilot: &mut dyn Autopilot,
    max_frames: u64,
    frame_ms: f64,
) -> SessionReport {
    let mut engine = SimulationEngine::new(config);
    pilot.reset();
    engine.queue_command(PlayerCommand::Start);
    let mut snapshot = engine.tick(0.0);
    info!(pilot = pilot.id(), max_frames, "headless session started");

    let mut frames_run = 0;
    while frames_run < max_frames && !snapshot.state.is_terminal() {
        if let Some(command) = pilot.next_command(&snapshot) {
            debug!(?command, frame = snapshot.time.frame, "autopilot command");
            engine.queue_command(command);
        }
        snapshot = engine.tick(frame_ms);
        frames_run += 1;
    }

    SessionReport {
        frames_run,
        final_snapshot: snapshot,
    }
}
