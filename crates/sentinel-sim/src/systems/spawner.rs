//! Spawn scheduler — admits meteorites based on the difficulty model and
//! performs the one-shot boss spawn.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::{Body, Crater, MeteoriteState, Shape, StatusEffects};
use sentinel_core::constants::*;
use sentinel_core::events::SimEvent;
use sentinel_core::types::{GameClock, Position, Velocity};

use crate::difficulty;

/// Spawn admission state. `boss_spawned` is the one-shot guard: the boss
/// spawns at most once per playthrough no matter how many ticks straddle
/// the threshold.
#[derive(Debug, Clone, Default)]
pub struct SpawnState {
    pub last_spawn_ms: f64,
    pub initial_spawn_done: bool,
    pub boss_spawned: bool,
    /// Game time at which the advisory boss warning banner ends.
    pub boss_warning_until_ms: f64,
}

/// Check spawn admission for this tick. Never called while paused, so a
/// "due" spawn is deferred, not skipped.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &GameClock,
    center: Position,
    view_width: f64,
    view_height: f64,
    state: &mut SpawnState,
    spawn_boost: f64,
    perk_mult: f64,
    next_meteorite_id: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    let spawn_dist = difficulty::spawn_radius(view_width, view_height);
    let interval = difficulty::spawn_interval_ms(clock.survival_ms / 1000.0, spawn_boost, perk_mult);
    let now = clock.game_ms;

    let due = if state.initial_spawn_done {
        now - state.last_spawn_ms >= interval
    } else {
        now >= INITIAL_SPAWN_GRACE_MS
    };
    if due {
        state.initial_spawn_done = true;
        spawn_meteorite(world, rng, center, spawn_dist, now, next_meteorite_id);
        state.last_spawn_ms = now;
    }

    if clock.survival_ms >= BOSS_SPAWN_SURVIVAL_MS && !state.boss_spawned {
        state.boss_spawned = true;
        state.boss_warning_until_ms = now + BOSS_WARNING_MS;
        spawn_boss(world, rng, center, spawn_dist, now, next_meteorite_id);
        events.push(SimEvent::BossWarning);
        log::info!("boss meteorite inbound at {:.1}s", clock.survival_ms / 1000.0);
    }
}

/// Spawn a normal meteorite at a uniform random angle on the spawn circle,
/// heading toward the turret at constant speed.
pub fn spawn_meteorite(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Position,
    spawn_dist: f64,
    now_ms: f64,
    next_id: &mut u32,
) -> hecs::Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = Position::new(
        center.x + angle.cos() * spawn_dist,
        center.y + angle.sin() * spawn_dist,
    );
    let radius = rng.gen_range(METEORITE_RADIUS_MIN..METEORITE_RADIUS_MIN + METEORITE_RADIUS_SPAN);
    let rotation_speed =
        rng.gen_range(-METEORITE_ROTATION_HALF_RANGE..METEORITE_ROTATION_HALF_RANGE);
    let shape = generate_shape(rng, radius, false);

    let meteorite_id = *next_id;
    *next_id += 1;

    world.spawn((
        position,
        Velocity::from_heading(position.angle_to(&center), METEORITE_SPEED),
        Body { radius },
        MeteoriteState {
            meteorite_id,
            hp: METEORITE_INITIAL_HP,
            max_hp: METEORITE_INITIAL_HP,
            rotation: 0.0,
            rotation_speed,
            spawned_at_ms: now_ms,
            is_boss: false,
            destroyed: false,
        },
        StatusEffects::default(),
        shape,
    ))
}

/// Spawn the boss: high HP, large radius, slow approach.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Position,
    spawn_dist: f64,
    now_ms: f64,
    next_id: &mut u32,
) -> hecs::Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = Position::new(
        center.x + angle.cos() * spawn_dist,
        center.y + angle.sin() * spawn_dist,
    );
    let shape = generate_shape(rng, BOSS_RADIUS, true);

    let meteorite_id = *next_id;
    *next_id += 1;

    world.spawn((
        position,
        Velocity::from_heading(
            position.angle_to(&center),
            METEORITE_SPEED * BOSS_SPEED_FACTOR,
        ),
        Body { radius: BOSS_RADIUS },
        MeteoriteState {
            meteorite_id,
            hp: BOSS_HP,
            max_hp: BOSS_HP,
            rotation: 0.0,
            rotation_speed: BOSS_ROTATION_SPEED,
            spawned_at_ms: now_ms,
            is_boss: true,
            destroyed: false,
        },
        StatusEffects::default(),
        shape,
    ))
}

/// Precompute the render geometry: a noisy regular polygon (7/10 sides by
/// size, 14 for the boss) and craters scattered inside it.
fn generate_shape(rng: &mut ChaCha8Rng, radius: f64, is_boss: bool) -> Shape {
    let sides = if is_boss {
        14
    } else if radius >= 24.0 {
        10
    } else {
        7
    };
    let noise = if is_boss || radius >= 24.0 { 0.15 } else { 0.08 };

    let mut vertices = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = (i as f64) * std::f64::consts::TAU / sides as f64;
        let r = radius * (rng.gen::<f64>() * noise + (1.0 - noise / 2.0));
        vertices.push(Position::new(angle.cos() * r, angle.sin() * r));
    }

    let crater_count = (radius / 5.0) as usize;
    let mut craters = Vec::with_capacity(crater_count);
    for _ in 0..crater_count {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let dist = rng.gen::<f64>() * radius * 0.7;
        craters.push(Crater {
            x: angle.cos() * dist,
            y: angle.sin() * dist,
            r: 1.5 + rng.gen::<f64>() * radius * 0.25,
        });
    }

    Shape { vertices, craters }
}
