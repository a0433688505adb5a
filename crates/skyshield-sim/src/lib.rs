//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs ECS world, runs the per-frame systems
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use hecs;
pub use skyshield_core as core;
pub use engine::{SimConfig, SimulationEngine};
