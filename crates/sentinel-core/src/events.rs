//! Events emitted by the simulation for audio and host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PerkId;
use crate::state::GameStats;
use crate::types::Position;

/// Audio events for the host sound system. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot was fired (once per shot, not per bullet).
    Fire,
    /// A bullet struck a meteorite.
    Hit,
    /// A fragment was tallied at the turret.
    Collect,
}

/// Discrete simulation events for the host. Drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A meteorite's HP reached zero. Emitted exactly once per meteorite.
    MeteoriteDestroyed { position: Position, boss: bool },
    /// The boss is inbound. Advisory only; does not block the simulation.
    BossWarning,
    /// The level-up threshold was reached; the simulation is paused until
    /// one of the offered perks is chosen.
    LevelUp { offers: Vec<PerkId> },
    /// A meteorite breached the turret. Terminal. The host should report
    /// `stats` to the persistence collaborator exactly once.
    GameOver { stats: GameStats },
}
