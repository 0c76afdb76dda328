//! Bullet system: homing steering, motion, travel expiry, and the
//! bullet-vs-meteorite collision resolution.
//!
//! Bullets are non-piercing: the first meteorite within collision range
//! consumes the bullet, and a bullet never deals damage twice. Damage
//! applied earlier in the tick is visible to later bullets — a meteorite
//! reduced to zero HP cannot be hit again in the same tick.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::{Body, BulletState, MeteoriteState, StatusEffects};
use sentinel_core::constants::*;
use sentinel_core::enums::FlashTint;
use sentinel_core::events::AudioEvent;
use sentinel_core::state::GameStats;
use sentinel_core::types::{Position, Velocity};

use super::effects;
use crate::homing::{self, TargetCandidate};

/// Scratch view of a live meteorite for this tick's collision pass.
struct Target {
    entity: Entity,
    id: u32,
    position: Position,
    radius: f64,
    /// HP mirror, decremented as hits land so later bullets skip the dead.
    hp: f64,
}

/// A confirmed hit, applied to the world after the bullet pass.
struct Hit {
    target: Entity,
    is_ice: bool,
    is_fire: bool,
    impact_pos: Position,
    impact_vel: Velocity,
}

/// Run one bullet tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    elapsed_ms: f64,
    damage: f64,
    stats: &mut GameStats,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    // Snapshot the live meteorites once; the bullet query below holds the
    // world borrow.
    let mut targets: Vec<Target> = Vec::new();
    for (entity, (pos, body, state)) in
        world.query_mut::<(&Position, &Body, &MeteoriteState)>()
    {
        if state.hp > 0.0 {
            targets.push(Target {
                entity,
                id: state.meteorite_id,
                position: *pos,
                radius: body.radius,
                hp: state.hp,
            });
        }
    }

    let mut hits: Vec<Hit> = Vec::new();
    despawn_buffer.clear();

    for (entity, (pos, vel, body, bullet)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Body, &mut BulletState)>()
    {
        if bullet.is_homing {
            update_homing(bullet, pos, vel, &targets, elapsed_ms);
        }

        pos.x += vel.x;
        pos.y += vel.y;
        bullet.distance_traveled += vel.speed();

        let mut consumed = false;
        for target in targets.iter_mut() {
            if target.hp <= 0.0 {
                continue;
            }
            let reach = target.radius + body.radius;
            if pos.distance_sq_to(&target.position) < reach * reach {
                target.hp -= damage;
                hits.push(Hit {
                    target: target.entity,
                    is_ice: bullet.is_ice,
                    is_fire: bullet.is_fire,
                    impact_pos: *pos,
                    impact_vel: *vel,
                });
                consumed = true;
                break;
            }
        }

        // Single-hit consumption, or quiet expiry at max travel distance.
        if consumed || bullet.distance_traveled >= bullet.max_distance {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for hit in hits {
        stats.total_damage_dealt += damage as u64;
        if let Ok(mut state) = world.get::<&mut MeteoriteState>(hit.target) {
            state.hp -= damage;
        }
        if let Ok(mut status) = world.get::<&mut StatusEffects>(hit.target) {
            status.flash_ms = FLASH_DURATION_MS;
            status.flash = if hit.is_ice {
                FlashTint::Ice
            } else if hit.is_fire {
                FlashTint::Fire
            } else {
                FlashTint::White
            };
            // Slow and burn refresh independently; both may be active.
            if hit.is_ice {
                status.slow_ms = SLOW_DURATION_MS;
            }
            if hit.is_fire {
                status.burn_ms = BURN_DURATION_MS;
            }
        }
        effects::spawn_impact(world, rng, hit.impact_pos, hit.impact_vel);
        audio_events.push(AudioEvent::Hit);
    }
}

/// Re-validate the homing target (exists and HP > 0), rescanning when it is
/// gone or the re-acquire cooldown elapsed, then steer. With no live
/// targets the bullet flies straight.
fn update_homing(
    bullet: &mut BulletState,
    pos: &Position,
    vel: &mut Velocity,
    targets: &[Target],
    elapsed_ms: f64,
) {
    bullet.search_cooldown_ms -= elapsed_ms;

    let target_alive = bullet
        .target_id
        .is_some_and(|id| targets.iter().any(|t| t.id == id && t.hp > 0.0));
    if !target_alive || bullet.search_cooldown_ms <= 0.0 {
        let candidates: Vec<TargetCandidate> = targets
            .iter()
            .filter(|t| t.hp > 0.0)
            .map(|t| TargetCandidate {
                id: t.id,
                position: t.position,
            })
            .collect();
        bullet.target_id = homing::nearest_target(&candidates, *pos);
        bullet.search_cooldown_ms = HOMING_SEARCH_COOLDOWN_MS;
    }

    if let Some(target) = bullet
        .target_id
        .and_then(|id| targets.iter().find(|t| t.id == id))
    {
        *vel = homing::steer(*vel, *pos, target.position);
    }
}
