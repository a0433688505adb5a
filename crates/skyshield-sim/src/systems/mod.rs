//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They mutate components in place, collect what has to go into a buffer,
//! and despawn after iteration.

pub mod cleanup;
pub mod explosions;
pub mod fire_control;
pub mod floating_text;
pub mod missiles;
pub mod progression;
pub mod rockets;
pub mod snapshot;
pub mod spawner;
