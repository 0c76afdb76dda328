//! Game snapshot — the complete visible state handed to the host each tick.
//!
//! The snapshot is read-only output: the render collaborator draws from it,
//! the audio collaborator plays `audio_events`, and the HUD reads `hud`.
//! It carries semantic state only; colors and theming are host decisions.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, SimEvent};
use crate::types::{GameClock, Position, Velocity};

/// Cumulative counters for one playthrough. Monotonically increasing;
/// reported to the persistence collaborator once at game over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub fragments_collected: u64,
    pub cores_collected: u64,
    pub meteorites_destroyed: u64,
    pub total_damage_dealt: u64,
    pub bullets_fired: u64,
}

/// Complete per-tick state for the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: GameClock,
    pub phase: GamePhase,
    pub turret: TurretView,
    /// Current screen-shake intensity (px).
    pub screen_shake: f64,
    /// Permanent theming flag set when the first boss dies.
    pub first_boss_defeated: bool,
    pub bullets: Vec<BulletView>,
    pub meteorites: Vec<MeteoriteView>,
    pub fragments: Vec<FragmentView>,
    pub effects: Vec<EffectView>,
    pub hud: HudView,
    /// Perks offered while `phase == AwaitingPerkChoice`; empty otherwise.
    pub perk_offers: Vec<PerkId>,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<SimEvent>,
    pub stats: GameStats,
}

/// Turret pose for rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TurretView {
    /// Smoothed aim angle (radians).
    pub angle: f64,
    /// Muzzle flash intensity (1.0 right after firing, decaying to 0).
    pub muzzle_flash: f64,
    /// Recoil displacement (px), derived from time since last shot.
    pub recoil: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub is_ice: bool,
    pub is_fire: bool,
    pub is_homing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteoriteView {
    pub meteorite_id: u32,
    pub position: Position,
    pub radius: f64,
    pub rotation: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub is_boss: bool,
    /// Slow status active (for tint/particle feedback).
    pub slowed: bool,
    /// Burn status active.
    pub burning: bool,
    /// Hit-flash strength in [0, 1]; 0 when no flash is active.
    pub flash_strength: f64,
    pub flash: FlashTint,
    /// Polygon outline in meteorite-local coordinates.
    pub vertices: Vec<Position>,
    pub craters: Vec<crate::components::Crater>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FragmentView {
    pub position: Position,
    pub radius: f64,
    pub is_core: bool,
    pub moving_to_turret: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Position,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
}

/// Aggregate HUD state recomputed at the end of every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    pub fragments_collected: u64,
    pub cores_collected: u64,
    /// Progress toward the next level-up, in [0, 1].
    pub level_progress: f64,
    /// Fragments required for the next level-up.
    pub level_threshold: u32,
    pub survival_secs: u64,
    /// Boss warning banner active.
    pub boss_warning: bool,
}
