//! Death processing for meteorites.
//!
//! A meteorite whose HP reached zero is processed exactly once: one
//! destroy event, one explosion, one fragment burst, then removal from
//! the store in the same tick. The `destroyed` flag guards the
//! exactly-once property.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::{Body, FragmentState, MeteoriteState};
use sentinel_core::constants::*;
use sentinel_core::events::SimEvent;
use sentinel_core::progression::TalentBonuses;
use sentinel_core::state::GameStats;
use sentinel_core::types::{Position, Velocity};

use super::effects;

struct Death {
    position: Position,
    is_boss: bool,
}

/// Process newly dead meteorites, then filter the dead out of the store.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bonuses: &TalentBonuses,
    stats: &mut GameStats,
    events: &mut Vec<SimEvent>,
    screen_shake: &mut f64,
    first_boss_defeated: &mut bool,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut deaths: Vec<Death> = Vec::new();
    for (_entity, (pos, state)) in world.query_mut::<(&Position, &mut MeteoriteState)>() {
        if state.hp <= 0.0 && !state.destroyed {
            state.destroyed = true;
            deaths.push(Death {
                position: *pos,
                is_boss: state.is_boss,
            });
        }
    }

    for death in &deaths {
        stats.meteorites_destroyed += 1;
        events.push(SimEvent::MeteoriteDestroyed {
            position: death.position,
            boss: death.is_boss,
        });

        let scale = if death.is_boss { 4.0 } else { 1.3 };
        effects::spawn_explosion(world, rng, death.position, scale, screen_shake);

        let base_count = if death.is_boss {
            FRAGMENT_COUNT_BOSS
        } else {
            FRAGMENT_COUNT_NORMAL
        };
        for _ in 0..base_count + bonuses.fragment_bonus {
            world.spawn((
                death.position,
                Velocity::new(
                    rng.gen_range(-FRAGMENT_BURST_HALF_RANGE..FRAGMENT_BURST_HALF_RANGE),
                    rng.gen_range(-FRAGMENT_BURST_HALF_RANGE..FRAGMENT_BURST_HALF_RANGE),
                ),
                Body {
                    radius: FRAGMENT_RADIUS,
                },
                FragmentState {
                    is_core: false,
                    moving_to_turret: false,
                },
            ));
        }

        if death.is_boss {
            if !*first_boss_defeated {
                log::info!("first boss defeated");
            }
            *first_boss_defeated = true;
            // Guaranteed core drop, stationary at the death position.
            world.spawn((
                death.position,
                Velocity::default(),
                Body {
                    radius: FRAGMENT_RADIUS * CORE_RADIUS_FACTOR,
                },
                FragmentState {
                    is_core: true,
                    moving_to_turret: false,
                },
            ));
        }
    }

    // Dead meteorites leave the store at the end of the tick.
    despawn_buffer.clear();
    for (entity, state) in world.query_mut::<&MeteoriteState>() {
        if state.hp <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
