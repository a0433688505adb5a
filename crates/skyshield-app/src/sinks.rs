//! Render and audio collaborators of the game loop.
//!
//! Rendering consumes a full snapshot per frame. Audio is fire-and-forget:
//! a failing sink is logged and the loop carries on.

use tracing::{debug, warn};

use skyshield_core::events::AudioEvent;
use skyshield_core::state::GameStateSnapshot;

use crate::error::Result;

/// Receives every snapshot the game loop produces.
pub trait RenderSink: Send {
    fn render(&mut self, snapshot: &GameStateSnapshot);
}

/// Plays audio cues for simulation events.
pub trait AudioSink: Send {
    fn play(&mut self, event: &AudioEvent) -> Result<()>;
}

/// Discards snapshots. Used by the headless binary.
#[derive(Debug, Default)]
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn render(&mut self, _snapshot: &GameStateSnapshot) {}
}

/// Writes audio cues to the trace log instead of a sound device.
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, event: &AudioEvent) -> Result<()> {
        debug!(?event, "audio cue");
        Ok(())
    }
}

/// Forward every event to `sink`. Playback errors never reach the caller.
pub fn dispatch_audio(sink: &mut dyn AudioSink, events: &[AudioEvent]) {
    for event in events {
        if let Err(err) = sink.play(event) {
            warn!(%err, "dropping audio cue");
        }
    }
}
