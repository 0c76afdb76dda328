//! Fragment lifecycle: free outward drift with drag, irreversible
//! magnetization near the pointer, travel to the turret, and tally.

use hecs::{Entity, World};

use sentinel_core::components::FragmentState;
use sentinel_core::constants::*;
use sentinel_core::events::AudioEvent;
use sentinel_core::state::GameStats;
use sentinel_core::types::{Position, Velocity};

/// Advance all fragments. Returns the number of ordinary (non-core)
/// fragments tallied this tick — the caller feeds those into the level-up
/// counter. Cores count only toward the persistent currency stats.
pub fn run(
    world: &mut World,
    pointer: Position,
    center: Position,
    magnet_range: f64,
    stats: &mut GameStats,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    let capture_sq = magnet_range * magnet_range;
    let tally_radius = TURRET_RADIUS + TURRET_CONTACT_MARGIN;
    let mut ordinary_collected = 0;

    despawn_buffer.clear();

    for (entity, (pos, vel, fragment)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut FragmentState)>()
    {
        if !fragment.moving_to_turret {
            pos.x += vel.x;
            pos.y += vel.y;
            vel.x *= FRAGMENT_DRAG;
            vel.y *= FRAGMENT_DRAG;
            // Irreversible once set.
            if pointer.distance_sq_to(pos) < capture_sq {
                fragment.moving_to_turret = true;
            }
        } else {
            let dist = pos.distance_to(&center);
            if dist > f64::EPSILON {
                pos.x += (center.x - pos.x) / dist * FRAGMENT_SEEK_SPEED;
                pos.y += (center.y - pos.y) / dist * FRAGMENT_SEEK_SPEED;
            }
            if dist < tally_radius {
                if fragment.is_core {
                    stats.cores_collected += 1;
                } else {
                    stats.fragments_collected += 1;
                    ordinary_collected += 1;
                }
                audio_events.push(AudioEvent::Collect);
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    ordinary_collected
}
