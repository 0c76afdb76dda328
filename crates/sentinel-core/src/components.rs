//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::FlashTint;
use crate::types::Position;

/// Collision body — every spatial entity has one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Collision radius in pixels.
    pub radius: f64,
}

/// Bullet state. Bullets are single-hit: consumed by the first meteorite
/// collision, or expired once cumulative travel reaches `max_distance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletState {
    /// Cumulative distance traveled (px).
    pub distance_traveled: f64,
    /// Travel distance at which the bullet expires (px).
    pub max_distance: f64,
    /// Applies a slow on hit.
    pub is_ice: bool,
    /// Applies a burn on hit.
    pub is_fire: bool,
    /// Steers toward the nearest live meteorite.
    pub is_homing: bool,
    /// Id of the current homing target. Re-validated (exists, HP > 0)
    /// every tick — never a direct entity reference.
    pub target_id: Option<u32>,
    /// Remaining cooldown before the next target re-acquisition scan (ms).
    pub search_cooldown_ms: f64,
}

/// Meteorite state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteoriteState {
    /// Stable id used by homing bullets to reference this meteorite.
    pub meteorite_id: u32,
    /// Current HP. Non-increasing over the meteorite's lifetime.
    pub hp: f64,
    pub max_hp: f64,
    /// Visual rotation (radians).
    pub rotation: f64,
    /// Rotation speed (radians per frame).
    pub rotation_speed: f64,
    /// Game time at spawn (ms).
    pub spawned_at_ms: f64,
    pub is_boss: bool,
    /// Set exactly once when HP reaches 0 and death is processed;
    /// guards against emitting a second destroy event.
    pub destroyed: bool,
}

/// Status timers on a meteorite. Slow and burn are independent and may be
/// active simultaneously; the flash timer is hit feedback only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Remaining slow duration (ms). Velocity is scaled while > 0.
    pub slow_ms: f64,
    /// Remaining burn duration (ms). Drains HP while > 0.
    pub burn_ms: f64,
    /// Remaining hit-flash duration (ms). No gameplay effect.
    pub flash_ms: f64,
    /// Tint of the current flash, set by the last hit's element.
    pub flash: FlashTint,
}

/// A surface crater, in meteorite-local coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Crater {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Precomputed render geometry for a meteorite: a noisy regular polygon
/// plus crater positions. Generated once at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<Position>,
    pub craters: Vec<Crater>,
}

/// Collectible fragment state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FragmentState {
    /// Boss-drop core fragment — counts toward persistent currency
    /// instead of the level-up counter.
    pub is_core: bool,
    /// Set when the fragment enters the pointer's capture radius.
    /// Irreversible: a magnetized fragment never returns to free flight.
    pub moving_to_turret: bool,
}

/// Transient visual effect. Auto-removed when life reaches 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectState {
    pub kind: crate::enums::EffectKind,
    /// Remaining life (1.0 at spawn for most kinds).
    pub life: f64,
    pub max_life: f64,
    /// Base render size (px).
    pub size: f64,
    /// Life drained per tick.
    pub decay_rate: f64,
}
