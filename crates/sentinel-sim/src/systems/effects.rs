//! Visual effect lifecycle: per-tick decay plus the spawn factories used
//! by the collision and destruction systems. Effects are cosmetic; the
//! only invariant the core enforces is removal once life reaches zero.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::EffectState;
use sentinel_core::constants::*;
use sentinel_core::enums::EffectKind;
use sentinel_core::types::{Position, Velocity};

/// Advance all effects: drift with drag, drain life, remove the expired.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, effect)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut EffectState)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        vel.x *= EFFECT_DRAG;
        vel.y *= EFFECT_DRAG;
        effect.life -= effect.decay_rate;
        if effect.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Explosion burst at a meteorite death: bright core, shockwave ring,
/// and tumbling debris. Large scales (boss) also kick the screen shake.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    scale: f64,
    screen_shake: &mut f64,
) {
    if scale > 2.0 {
        *screen_shake = screen_shake.max(SCREEN_SHAKE_BOSS);
    }

    world.spawn((
        position,
        Velocity::default(),
        EffectState {
            kind: EffectKind::Burst,
            life: 1.0,
            max_life: 1.0,
            size: 60.0 * scale,
            decay_rate: 0.12,
        },
    ));
    world.spawn((
        position,
        Velocity::default(),
        EffectState {
            kind: EffectKind::Shockwave,
            life: 1.0,
            max_life: 1.0,
            size: 35.0 * scale,
            decay_rate: 0.03,
        },
    ));

    let debris_count = (12.0 * scale) as usize;
    for _ in 0..debris_count {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = 4.0 + rng.gen::<f64>() * 8.0;
        world.spawn((
            position,
            Velocity::from_heading(angle, speed),
            EffectState {
                kind: EffectKind::Debris,
                life: 0.8 + rng.gen::<f64>() * 0.8,
                max_life: 1.0,
                size: (5.0 + rng.gen::<f64>() * 6.0) * scale.sqrt(),
                decay_rate: 0.015,
            },
        ));
    }
}

/// Impact flash and sparks where a bullet struck, sprayed back along the
/// bullet's incoming direction.
pub fn spawn_impact(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    incoming: Velocity,
) {
    world.spawn((
        position,
        Velocity::default(),
        EffectState {
            kind: EffectKind::Impact,
            life: 0.4,
            max_life: 0.4,
            size: 25.0,
            decay_rate: 0.15,
        },
    ));
    world.spawn((
        position,
        Velocity::default(),
        EffectState {
            kind: EffectKind::Burst,
            life: 0.3,
            max_life: 0.3,
            size: 12.0,
            decay_rate: 0.1,
        },
    ));

    let back = incoming.heading() + std::f64::consts::PI;
    for _ in 0..5 {
        let spread = (rng.gen::<f64>() - 0.5) * 1.5;
        let speed = 3.0 + rng.gen::<f64>() * 5.0;
        world.spawn((
            position,
            Velocity::from_heading(back + spread, speed),
            EffectState {
                kind: EffectKind::Sparks,
                life: 0.5,
                max_life: 0.5,
                size: 2.0,
                decay_rate: 0.08,
            },
        ));
    }
}
