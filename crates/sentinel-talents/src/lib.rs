//! Persistent cross-run progression: the talent tree, accumulated
//! currency, and JSON save/load.
//!
//! The host loads a `TalentState` at startup, passes `bonuses()` into the
//! simulation config, and calls `add_currency` once per game over.

pub mod store;
pub mod tree;

pub use store::{load_or_default, save_to_file};
pub use tree::{TalentId, TalentLevels, TalentNode, TalentState, UpgradeError, TALENT_NODES};
