//! Meteorite status decay, motion, and the turret breach test.

use hecs::World;

use sentinel_core::components::{MeteoriteState, StatusEffects};
use sentinel_core::constants::*;
use sentinel_core::types::{Position, Velocity};

/// Advance all meteorites by one tick and return whether any breached the
/// turret. Status timers drain by elapsed ms; motion and rotation advance
/// once per tick, scaled down while slowed. Burn drains HP here, which can
/// kill a meteorite independently of bullet damage — death processing
/// happens later in the tick.
///
/// The breach test is the single terminal condition: any meteorite within
/// `TURRET_RADIUS + TURRET_CONTACT_MARGIN` of the center ends the game.
pub fn run(world: &mut World, elapsed_ms: f64, center: Position) -> bool {
    let breach_radius = TURRET_RADIUS + TURRET_CONTACT_MARGIN;
    let breach_sq = breach_radius * breach_radius;
    let mut breached = false;

    for (_entity, (pos, vel, state, status)) in
        world.query_mut::<(&mut Position, &Velocity, &mut MeteoriteState, &mut StatusEffects)>()
    {
        let mut speed_mult = 1.0;
        if status.slow_ms > 0.0 {
            speed_mult = SLOW_FACTOR;
            status.slow_ms -= elapsed_ms;
        }
        if status.burn_ms > 0.0 {
            state.hp -= BURN_HP_PER_MS * elapsed_ms;
            status.burn_ms -= elapsed_ms;
        }
        if status.flash_ms > 0.0 {
            status.flash_ms -= elapsed_ms;
        }

        pos.x += vel.x * speed_mult;
        pos.y += vel.y * speed_mult;
        state.rotation += state.rotation_speed * speed_mult;

        if pos.distance_sq_to(&center) < breach_sq {
            breached = true;
        }
    }

    breached
}
