//! Simulation engine for STELLAR SENTINEL.
//!
//! Owns the hecs ECS world, advances the game by one tick per host frame,
//! and produces a `GameSnapshot` for the render/audio/HUD collaborators.
//! Completely headless, enabling deterministic testing.

pub mod difficulty;
pub mod engine;
pub mod homing;
pub mod systems;

pub use engine::{GameEngine, SimConfig};
pub use sentinel_core as core;
