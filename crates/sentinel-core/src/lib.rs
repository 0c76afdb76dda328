//! Core types and definitions for the STELLAR SENTINEL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input, snapshots, events, progression state, and constants.
//! It has no dependency on any runtime framework or rendering surface.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod progression;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
