//! SKYSHIELD host application.
//!
//! Drives the simulation engine from a frame-paced game loop thread and
//! hands every snapshot to the render and audio collaborators.

pub mod autopilot;
pub mod clock;
pub mod error;
pub mod game_loop;
pub mod sinks;
pub mod state;

pub use error::{AppError, Result};
