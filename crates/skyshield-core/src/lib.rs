//! Core types and definitions for the SKYSHIELD simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry helpers, components, commands, state snapshots, events and
//! constants. It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
