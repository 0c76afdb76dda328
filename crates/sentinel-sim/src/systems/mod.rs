//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` plus the state they need.
//! The engine invokes them in a fixed order; they do not own state.

pub mod bullets;
pub mod destruction;
pub mod effects;
pub mod fragments;
pub mod meteorites;
pub mod snapshot;
pub mod spawner;
