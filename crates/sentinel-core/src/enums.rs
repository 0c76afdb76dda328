//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `AwaitingPerkChoice` is the single pause point: simulation advancement,
/// turret aim tracking, and firing are all suspended until one perk is
/// selected. `GameOver` is one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    AwaitingPerkChoice,
    GameOver,
}

/// Semantic hit-flash tint. The renderer decides the actual colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashTint {
    #[default]
    White,
    Ice,
    Fire,
}

/// Visual effect category. Purely cosmetic; the core only manages lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Bright expanding core of an explosion.
    Burst,
    /// Expanding ring around an explosion.
    Shockwave,
    /// Tumbling explosion debris.
    Debris,
    /// Directional sparks on bullet impact.
    Sparks,
    /// Short white pop at the impact point.
    Impact,
}

/// Run-scoped perk identifiers offered at level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerkId {
    /// +1 bullet per shot (stacking).
    ExtraBullet,
    /// Fire cooldown ×0.8 (stacking, floored at the minimum cooldown).
    ReduceCooldown,
    /// +5 flat damage (stacking).
    IncreaseDamage,
    /// Bullets steer toward the nearest live meteorite (one-time).
    Homing,
    /// Bullets slow meteorites on hit (one-time).
    Ice,
    /// Bullets ignite meteorites on hit (one-time).
    Fire,
    /// Meteorite spawn rate +0.5× (stacking).
    MoreMeteorites,
}

impl PerkId {
    /// Every perk, in offer-pool order.
    pub const ALL: [PerkId; 7] = [
        PerkId::ExtraBullet,
        PerkId::ReduceCooldown,
        PerkId::IncreaseDamage,
        PerkId::Homing,
        PerkId::Ice,
        PerkId::Fire,
        PerkId::MoreMeteorites,
    ];

    /// One-time perks can be acquired at most once per playthrough and are
    /// filtered out of subsequent offers.
    pub fn is_one_time(&self) -> bool {
        matches!(self, PerkId::Homing | PerkId::Ice | PerkId::Fire)
    }
}
