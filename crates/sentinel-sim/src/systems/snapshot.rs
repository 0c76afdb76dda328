//! Snapshot system: queries the ECS world and builds a complete
//! `GameSnapshot` for the host.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use sentinel_core::components::*;
use sentinel_core::constants::FLASH_DURATION_MS;
use sentinel_core::enums::{GamePhase, PerkId};
use sentinel_core::events::{AudioEvent, SimEvent};
use sentinel_core::state::*;
use sentinel_core::types::{GameClock, Position, Velocity};

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    clock: GameClock,
    phase: GamePhase,
    turret: TurretView,
    screen_shake: f64,
    first_boss_defeated: bool,
    hud: HudView,
    perk_offers: Vec<PerkId>,
    audio_events: Vec<AudioEvent>,
    events: Vec<SimEvent>,
    stats: GameStats,
) -> GameSnapshot {
    GameSnapshot {
        time: clock,
        phase,
        turret,
        screen_shake,
        first_boss_defeated,
        bullets: build_bullets(world),
        meteorites: build_meteorites(world),
        fragments: build_fragments(world),
        effects: build_effects(world),
        hud,
        perk_offers,
        audio_events,
        events,
        stats,
    }
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Position, &Velocity, &Body, &BulletState)>()
        .iter()
        .map(|(_, (pos, vel, body, bullet))| BulletView {
            position: *pos,
            velocity: *vel,
            radius: body.radius,
            is_ice: bullet.is_ice,
            is_fire: bullet.is_fire,
            is_homing: bullet.is_homing,
        })
        .collect()
}

fn build_meteorites(world: &World) -> Vec<MeteoriteView> {
    let mut meteorites: Vec<MeteoriteView> = world
        .query::<(&Position, &Body, &MeteoriteState, &StatusEffects, &Shape)>()
        .iter()
        .map(|(_, (pos, body, state, status, shape))| MeteoriteView {
            meteorite_id: state.meteorite_id,
            position: *pos,
            radius: body.radius,
            rotation: state.rotation,
            hp: state.hp,
            max_hp: state.max_hp,
            is_boss: state.is_boss,
            slowed: status.slow_ms > 0.0,
            burning: status.burn_ms > 0.0,
            flash_strength: (status.flash_ms / FLASH_DURATION_MS).clamp(0.0, 1.0),
            flash: status.flash,
            vertices: shape.vertices.clone(),
            craters: shape.craters.clone(),
        })
        .collect();
    meteorites.sort_by_key(|m| m.meteorite_id);
    meteorites
}

fn build_fragments(world: &World) -> Vec<FragmentView> {
    world
        .query::<(&Position, &Body, &FragmentState)>()
        .iter()
        .map(|(_, (pos, body, fragment))| FragmentView {
            position: *pos,
            radius: body.radius,
            is_core: fragment.is_core,
            moving_to_turret: fragment.moving_to_turret,
        })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Position, &EffectState)>()
        .iter()
        .map(|(_, (pos, effect))| EffectView {
            kind: effect.kind,
            position: *pos,
            life: effect.life,
            max_life: effect.max_life,
            size: effect.size,
        })
        .collect()
}
