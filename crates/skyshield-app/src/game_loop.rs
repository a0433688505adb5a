//! Game loop thread: runs the simulation engine at the configured frame
//! rate and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and are drained before every frame, so
//! a restart is always applied before the next simulation step runs.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{debug, info};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::SimulationEngine;

use crate::clock::FrameClock;
use crate::error::{AppError, Result};
use crate::sinks::{self, AudioSink, RenderSink};
use crate::state::{GameLoopCommand, LoopConfig};

/// Owner-side handle of a running game loop.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<()> {
        self.command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::LoopDisconnected)
    }

    /// The most recent snapshot, if a frame has run yet.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) -> Result<()> {
        // The loop may already be gone; joining below still succeeds.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread.join().map_err(|_| AppError::LoopPanicked)?;
        }
        Ok(())
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: LoopConfig,
    render: Box<dyn RenderSink>,
    audio: Box<dyn AudioSink>,
) -> Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("skyshield-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared, render, audio);
        })?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut render: Box<dyn RenderSink>,
    mut audio: Box<dyn AudioSink>,
) {
    let frame_duration = config.frame_duration();
    let mut clock = FrameClock::new(config.sim.max_frame_delta_ms);
    let mut engine = SimulationEngine::new(config.sim);
    let mut next_frame_time = Instant::now();
    info!(?frame_duration, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    if matches!(cmd, PlayerCommand::Start | PlayerCommand::Restart) {
                        clock.reset();
                    }
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one frame (the engine only steps while Playing)
        let delta_ms = clock.tick(Instant::now());
        let snapshot = engine.tick(delta_ms);

        // 3. Hand the frame to the collaborators
        sinks::dispatch_audio(audio.as_mut(), &snapshot.audio_events);
        render.render(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
