//! Run-scoped progression: perk state and the level-up threshold curve,
//! plus the numeric bonuses read from the persistent talent collaborator
//! at playthrough start.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PerkId;

/// Mutable per-run perk record. Reset at each new game.
///
/// Stacking perks accumulate; one-time perks are idempotent flags recorded
/// in `owned_one_timers` so the offer generator can exclude them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkState {
    pub bullets_per_shot: u32,
    pub cooldown_mult: f64,
    pub damage_boost: f64,
    pub is_homing: bool,
    pub is_ice: bool,
    pub is_fire: bool,
    pub spawn_rate_mult: f64,
    pub owned_one_timers: Vec<PerkId>,
}

impl Default for PerkState {
    fn default() -> Self {
        Self {
            bullets_per_shot: 1,
            cooldown_mult: 1.0,
            damage_boost: 0.0,
            is_homing: false,
            is_ice: false,
            is_fire: false,
            spawn_rate_mult: 1.0,
            owned_one_timers: Vec::new(),
        }
    }
}

impl PerkState {
    /// Apply one perk selection. One-time perks already owned are no-ops.
    pub fn apply(&mut self, perk: PerkId) {
        match perk {
            PerkId::ExtraBullet => self.bullets_per_shot += 1,
            PerkId::ReduceCooldown => self.cooldown_mult *= PERK_COOLDOWN_FACTOR,
            PerkId::IncreaseDamage => self.damage_boost += PERK_DAMAGE_BONUS,
            PerkId::Homing => self.is_homing = true,
            PerkId::Ice => self.is_ice = true,
            PerkId::Fire => self.is_fire = true,
            PerkId::MoreMeteorites => self.spawn_rate_mult += PERK_SPAWN_RATE_BONUS,
        }
        if perk.is_one_time() && !self.owned_one_timers.contains(&perk) {
            self.owned_one_timers.push(perk);
        }
    }

    /// Effective fire cooldown in ms, given the talent reduction.
    pub fn effective_cooldown_ms(&self, cooldown_reduction_ms: f64) -> f64 {
        let scaled = (BULLET_FIRE_COOLDOWN_MS - cooldown_reduction_ms) * self.cooldown_mult;
        scaled.max(MIN_FIRE_COOLDOWN_MS)
    }

    /// Perks eligible for the next offer: everything except one-time perks
    /// already owned.
    pub fn eligible_perks(&self) -> Vec<PerkId> {
        PerkId::ALL
            .iter()
            .copied()
            .filter(|p| !p.is_one_time() || !self.owned_one_timers.contains(p))
            .collect()
    }
}

/// Grow the level-up threshold after a level-up: `floor(threshold * 1.5) + 3`.
/// Strictly increasing; tuned, do not "fix".
pub fn next_threshold(threshold: u32) -> u32 {
    threshold + threshold / 2 + 3
}

/// Derived numeric bonuses from the persistent talent tree, read once at
/// playthrough start. All zero for a fresh profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TalentBonuses {
    /// Flat reduction of the base fire cooldown (ms).
    pub cooldown_reduction_ms: f64,
    /// Flat damage added to every bullet hit.
    pub damage_boost: f64,
    /// Spawn-interval divisor contribution: interval /= (1 + spawn_boost).
    pub spawn_boost: f64,
    /// Extra fragments per meteorite destroyed.
    pub fragment_bonus: u32,
    /// Flat bullet speed increase (px per frame).
    pub bullet_speed_boost: f64,
    /// Flat increase of the pointer capture radius (px).
    pub magnet_range_boost: f64,
}
