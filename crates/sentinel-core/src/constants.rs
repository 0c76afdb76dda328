//! Simulation constants and tuning parameters.
//!
//! The difficulty and pacing values are empirically tuned "feel" numbers
//! carried over unchanged; do not round or normalize them.

// --- Arena & turret ---

/// Radius of the arena circle — also the maximum bullet travel distance (px).
pub const CIRCLE_RADIUS: f64 = 300.0;

/// Turret body radius (px).
pub const TURRET_RADIUS: f64 = 24.0;

/// Extra margin beyond the turret radius for breach and fragment tally tests (px).
pub const TURRET_CONTACT_MARGIN: f64 = 5.0;

/// Proportional gain applied per tick to the turret aim error.
pub const TURRET_AIM_GAIN: f64 = 0.18;

/// Muzzle flash decay per tick.
pub const TURRET_FLASH_DECAY: f64 = 0.1;

/// Recoil animation window after firing (ms).
pub const TURRET_RECOIL_MS: f64 = 180.0;

/// Maximum recoil displacement (px).
pub const TURRET_RECOIL_MAX: f64 = 12.0;

// --- Firing ---

/// Base cooldown between shots (ms), before talents and perks.
pub const BULLET_FIRE_COOLDOWN_MS: f64 = 1000.0;

/// Hard lower bound on the effective fire cooldown (ms).
pub const MIN_FIRE_COOLDOWN_MS: f64 = 200.0;

/// Base bullet speed (px per frame), before talents.
pub const BULLET_SPEED: f64 = 3.5;

/// Bullet collision radius (px).
pub const BULLET_RADIUS: f64 = 6.0;

/// Base damage per bullet hit.
pub const BULLET_DAMAGE: f64 = 5.0;

/// Angular spread between barrels when firing multiple bullets (radians).
pub const MULTI_SHOT_SPREAD: f64 = 0.15;

// --- Meteorites ---

/// Base interval between meteorite spawns (ms), before scaling.
pub const METEORITE_SPAWN_INTERVAL_MS: f64 = 4500.0;

/// Floor on the scaled spawn interval (ms).
pub const MIN_SPAWN_INTERVAL_MS: f64 = 350.0;

/// Game time before the first meteorite is admitted (ms).
pub const INITIAL_SPAWN_GRACE_MS: f64 = 300.0;

/// Margin added to the half-diagonal so spawns are always off-screen (px).
pub const SPAWN_DISTANCE_MARGIN: f64 = 150.0;

/// Meteorite approach speed (px per frame).
pub const METEORITE_SPEED: f64 = 0.5;

/// Starting HP for a normal meteorite.
pub const METEORITE_INITIAL_HP: f64 = 10.0;

/// Normal meteorite radius range: [MIN, MIN + SPAN).
pub const METEORITE_RADIUS_MIN: f64 = 14.0;
pub const METEORITE_RADIUS_SPAN: f64 = 24.0;

/// Rotation speed half-range for normal meteorites (radians per frame).
pub const METEORITE_ROTATION_HALF_RANGE: f64 = 0.02;

// --- Boss ---

/// Survival time at which the boss spawns (ms).
pub const BOSS_SPAWN_SURVIVAL_MS: f64 = 30_000.0;

/// Boss HP.
pub const BOSS_HP: f64 = 200.0;

/// Boss radius (px).
pub const BOSS_RADIUS: f64 = 65.0;

/// Boss speed as a fraction of normal meteorite speed.
pub const BOSS_SPEED_FACTOR: f64 = 0.4;

/// Boss rotation speed (radians per frame).
pub const BOSS_ROTATION_SPEED: f64 = 0.008;

/// Duration of the advisory boss warning (ms).
pub const BOSS_WARNING_MS: f64 = 4000.0;

// --- Status effects ---

/// Slow duration applied by an ice bullet (ms).
pub const SLOW_DURATION_MS: f64 = 2000.0;

/// Velocity multiplier while slowed.
pub const SLOW_FACTOR: f64 = 0.4;

/// Burn duration applied by a fire bullet (ms).
pub const BURN_DURATION_MS: f64 = 3000.0;

/// HP drained per millisecond of burn.
pub const BURN_HP_PER_MS: f64 = 0.006;

/// Hit-feedback flash duration (ms).
pub const FLASH_DURATION_MS: f64 = 120.0;

// --- Homing ---

/// Cooldown between homing target re-acquisition scans (ms).
pub const HOMING_SEARCH_COOLDOWN_MS: f64 = 150.0;

/// Proportional gain applied per tick to the homing angular error.
pub const HOMING_TURN_GAIN: f64 = 0.18;

// --- Fragments ---

/// Fragment radius (px); core fragments are scaled up.
pub const FRAGMENT_RADIUS: f64 = 4.0;

/// Radius multiplier for core fragments.
pub const CORE_RADIUS_FACTOR: f64 = 2.5;

/// Outward burst velocity half-range per axis (px per frame).
pub const FRAGMENT_BURST_HALF_RANGE: f64 = 7.5;

/// Per-frame velocity drag while a fragment is free-floating.
pub const FRAGMENT_DRAG: f64 = 0.92;

/// Base pointer capture radius before the magnet talent (px).
pub const FRAGMENT_MAGNET_BASE_RANGE: f64 = 30.0;

/// Speed of a magnetized fragment toward the turret (px per frame).
pub const FRAGMENT_SEEK_SPEED: f64 = 12.0;

/// Fragments dropped by a normal meteorite, before the talent bonus.
pub const FRAGMENT_COUNT_NORMAL: u32 = 4;

/// Fragments dropped by the boss, before the talent bonus.
pub const FRAGMENT_COUNT_BOSS: u32 = 20;

// --- Visual effects ---

/// Per-frame velocity drag applied to drifting effects.
pub const EFFECT_DRAG: f64 = 0.95;

/// Screen shake decay factor per tick.
pub const SCREEN_SHAKE_DECAY: f64 = 0.9;

/// Screen shake intensity for a boss-scale explosion.
pub const SCREEN_SHAKE_BOSS: f64 = 15.0;

// --- Progression ---

/// Fragments required for the first level-up.
pub const INITIAL_UPGRADE_THRESHOLD: u32 = 5;

/// Number of perks offered per level-up.
pub const PERK_OFFER_COUNT: usize = 3;

/// Cooldown multiplier per ReduceCooldown selection.
pub const PERK_COOLDOWN_FACTOR: f64 = 0.8;

/// Flat damage added per IncreaseDamage selection.
pub const PERK_DAMAGE_BONUS: f64 = 5.0;

/// Spawn-rate multiplier added per MoreMeteorites selection.
pub const PERK_SPAWN_RATE_BONUS: f64 = 0.5;
