//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world and all scalar simulation state,
//! advances everything by one tick per host frame callback, and produces
//! a `GameSnapshot` after every tick. Single-threaded: all mutation
//! happens synchronously inside `tick`.

use hecs::World;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::commands::TickInput;
use sentinel_core::constants::*;
use sentinel_core::enums::{GamePhase, PerkId};
use sentinel_core::events::{AudioEvent, SimEvent};
use sentinel_core::progression::{next_threshold, PerkState, TalentBonuses};
use sentinel_core::state::{GameSnapshot, GameStats, HudView, TurretView};
use sentinel_core::types::{wrap_angle, GameClock, Position, Velocity};

use crate::systems;
use crate::systems::spawner::SpawnState;

/// Configuration for starting a new playthrough.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Initial viewport size in pixels.
    pub view_width: f64,
    pub view_height: f64,
    /// Bonuses read once from the persistent talent collaborator.
    pub bonuses: TalentBonuses,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            view_width: 1280.0,
            view_height: 720.0,
            bonuses: TalentBonuses::default(),
        }
    }
}

/// Turret scalar state, owned by the engine.
#[derive(Debug, Clone, Default)]
struct TurretState {
    /// Smoothed aim angle (radians).
    angle: f64,
    /// Muzzle flash intensity, 1.0 right after firing.
    muzzle_flash: f64,
    /// Game time of the last shot (ms).
    last_fire_ms: f64,
}

/// Level-up progression for the current run.
#[derive(Debug, Clone)]
struct LevelProgress {
    threshold: u32,
    progress: u32,
    /// Perks offered while awaiting a choice; empty otherwise.
    offers: Vec<PerkId>,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            threshold: INITIAL_UPGRADE_THRESHOLD,
            progress: 0,
            offers: Vec::new(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    phase: GamePhase,
    clock: GameClock,
    rng: ChaCha8Rng,
    view_width: f64,
    view_height: f64,
    bonuses: TalentBonuses,
    perks: PerkState,
    stats: GameStats,
    turret: TurretState,
    screen_shake: f64,
    spawner: SpawnState,
    progress: LevelProgress,
    first_boss_defeated: bool,
    next_meteorite_id: u32,
    audio_events: Vec<AudioEvent>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl GameEngine {
    /// Create a new engine for a fresh playthrough.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            phase: GamePhase::default(),
            clock: GameClock::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            view_width: config.view_width,
            view_height: config.view_height,
            bonuses: config.bonuses,
            perks: PerkState::default(),
            stats: GameStats::default(),
            turret: TurretState::default(),
            screen_shake: 0.0,
            spawner: SpawnState::default(),
            progress: LevelProgress::default(),
            first_boss_defeated: false,
            next_meteorite_id: 0,
            audio_events: Vec::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// `elapsed_ms` is wall time since the previous tick (the host passes
    /// 0 on the first tick). While paused for a perk choice or after game
    /// over, the tick only rebuilds the snapshot — no clocks advance, no
    /// entities move, and fire input is ignored.
    pub fn tick(&mut self, elapsed_ms: f64, input: &TickInput) -> GameSnapshot {
        if self.phase == GamePhase::Playing {
            self.advance(elapsed_ms, input);
        }
        self.build_snapshot()
    }

    /// Resolve the pending level-up. Ignored unless a perk choice is
    /// awaited and `perk` is among the current offers; exactly one valid
    /// selection resumes the simulation.
    pub fn choose_perk(&mut self, perk: PerkId) {
        if self.phase != GamePhase::AwaitingPerkChoice || !self.progress.offers.contains(&perk) {
            return;
        }
        self.perks.apply(perk);
        self.progress.offers.clear();
        self.phase = GamePhase::Playing;
    }

    /// Update the viewport; the turret recenters and spawn distances
    /// rescale accordingly.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Cumulative stats for this playthrough.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Turret center — the screen center for the current viewport.
    pub fn center(&self) -> Position {
        Position::new(self.view_width / 2.0, self.view_height / 2.0)
    }

    /// Run one full simulation step.
    fn advance(&mut self, elapsed_ms: f64, input: &TickInput) {
        self.clock.advance(elapsed_ms);
        let center = self.center();

        // Turret aim: proportional control toward the pointer angle.
        let target_angle = center.angle_to(&input.pointer);
        let error = wrap_angle(target_angle - self.turret.angle);
        self.turret.angle += error * TURRET_AIM_GAIN;

        // Transient scalar decay.
        if self.turret.muzzle_flash > 0.0 {
            self.turret.muzzle_flash -= TURRET_FLASH_DECAY;
        }
        self.screen_shake *= SCREEN_SHAKE_DECAY;

        if input.fire {
            self.try_fire(center);
        }

        // 1. Spawn admission (normal + boss).
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.clock,
            center,
            self.view_width,
            self.view_height,
            &mut self.spawner,
            self.bonuses.spawn_boost,
            self.perks.spawn_rate_mult,
            &mut self.next_meteorite_id,
            &mut self.events,
        );
        // 2. Visual effect decay.
        systems::effects::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Meteorite status/motion and the turret breach test.
        let breached = systems::meteorites::run(&mut self.world, elapsed_ms, center);
        if breached {
            self.game_over();
            return;
        }
        // 4. Bullet homing/motion/collision.
        let damage = BULLET_DAMAGE + self.bonuses.damage_boost + self.perks.damage_boost;
        systems::bullets::run(
            &mut self.world,
            &mut self.rng,
            elapsed_ms,
            damage,
            &mut self.stats,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 5. Death processing and fragment bursts.
        systems::destruction::run(
            &mut self.world,
            &mut self.rng,
            &self.bonuses,
            &mut self.stats,
            &mut self.events,
            &mut self.screen_shake,
            &mut self.first_boss_defeated,
            &mut self.despawn_buffer,
        );
        // 6. Fragment motion and capture.
        let magnet_range = FRAGMENT_MAGNET_BASE_RANGE + self.bonuses.magnet_range_boost;
        let ordinary = systems::fragments::run(
            &mut self.world,
            input.pointer,
            center,
            magnet_range,
            &mut self.stats,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 7. Level-up check. At most one selection opens per tick: once
        // the pause begins, fragments tallied past the threshold do not
        // queue a second choice.
        for _ in 0..ordinary {
            self.progress.progress += 1;
            if self.progress.progress >= self.progress.threshold {
                self.progress.progress = 0;
                self.progress.threshold = next_threshold(self.progress.threshold);
                self.open_perk_selection();
                break;
            }
        }
    }

    /// Fire if the cooldown window has elapsed. Requests inside the window
    /// are dropped, not buffered.
    fn try_fire(&mut self, center: Position) {
        let cooldown = self
            .perks
            .effective_cooldown_ms(self.bonuses.cooldown_reduction_ms);
        if self.clock.game_ms - self.turret.last_fire_ms < cooldown {
            return;
        }

        let speed = BULLET_SPEED + self.bonuses.bullet_speed_boost;
        let count = self.perks.bullets_per_shot;
        for i in 0..count {
            let offset = (i as f64 - (count as f64 - 1.0) / 2.0) * MULTI_SHOT_SPREAD;
            self.world.spawn((
                center,
                Velocity::from_heading(self.turret.angle + offset, speed),
                sentinel_core::components::Body {
                    radius: BULLET_RADIUS,
                },
                sentinel_core::components::BulletState {
                    distance_traveled: 0.0,
                    max_distance: CIRCLE_RADIUS,
                    is_ice: self.perks.is_ice,
                    is_fire: self.perks.is_fire,
                    is_homing: self.perks.is_homing,
                    target_id: None,
                    search_cooldown_ms: 0.0,
                },
            ));
            self.stats.bullets_fired += 1;
        }

        self.turret.last_fire_ms = self.clock.game_ms;
        self.turret.muzzle_flash = 1.0;
        self.audio_events.push(AudioEvent::Fire);
    }

    /// Pause for a perk choice: draw distinct offers from the eligible
    /// pool (one-time perks already owned are excluded; with fewer than
    /// three eligible, offer whatever remains).
    fn open_perk_selection(&mut self) {
        let mut pool = self.perks.eligible_perks();
        pool.shuffle(&mut self.rng);
        pool.truncate(PERK_OFFER_COUNT);
        self.progress.offers = pool.clone();
        self.events.push(SimEvent::LevelUp { offers: pool });
        self.phase = GamePhase::AwaitingPerkChoice;
    }

    /// One-way transition to game over. Stats are reported through the
    /// event exactly once; later ticks only rebuild the snapshot.
    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "game over after {:.1}s: {} destroyed, {} fragments",
            self.clock.survival_ms / 1000.0,
            self.stats.meteorites_destroyed,
            self.stats.fragments_collected,
        );
        self.events.push(SimEvent::GameOver { stats: self.stats });
    }

    fn build_snapshot(&mut self) -> GameSnapshot {
        let recoil_phase =
            1.0 - (self.clock.game_ms - self.turret.last_fire_ms) / TURRET_RECOIL_MS;
        let turret = TurretView {
            angle: self.turret.angle,
            muzzle_flash: self.turret.muzzle_flash.max(0.0),
            recoil: recoil_phase.max(0.0) * TURRET_RECOIL_MAX,
        };
        let hud = HudView {
            fragments_collected: self.stats.fragments_collected,
            cores_collected: self.stats.cores_collected,
            level_progress: (self.progress.progress as f64 / self.progress.threshold as f64)
                .min(1.0),
            level_threshold: self.progress.threshold,
            survival_secs: self.clock.survival_secs(),
            boss_warning: self.spawner.boss_spawned
                && self.clock.game_ms < self.spawner.boss_warning_until_ms,
        };

        systems::snapshot::build_snapshot(
            &self.world,
            self.clock,
            self.phase,
            turret,
            self.screen_shake,
            self.first_boss_defeated,
            hud,
            self.progress.offers.clone(),
            std::mem::take(&mut self.audio_events),
            std::mem::take(&mut self.events),
            self.stats,
        )
    }

    // --- Test support ---

    /// Spawn a meteorite with explicit kinematics (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_meteorite(
        &mut self,
        position: Position,
        velocity: Velocity,
        hp: f64,
        radius: f64,
        is_boss: bool,
    ) -> u32 {
        use sentinel_core::components::{Body, MeteoriteState, Shape, StatusEffects};

        let meteorite_id = self.next_meteorite_id;
        self.next_meteorite_id += 1;
        self.world.spawn((
            position,
            velocity,
            Body { radius },
            MeteoriteState {
                meteorite_id,
                hp,
                max_hp: hp,
                rotation: 0.0,
                rotation_speed: 0.0,
                spawned_at_ms: self.clock.game_ms,
                is_boss,
                destroyed: false,
            },
            StatusEffects::default(),
            Shape {
                vertices: Vec::new(),
                craters: Vec::new(),
            },
        ));
        meteorite_id
    }

    /// Spawn a bullet with explicit kinematics and element flags (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_bullet(
        &mut self,
        position: Position,
        velocity: Velocity,
        is_ice: bool,
        is_fire: bool,
        is_homing: bool,
    ) {
        use sentinel_core::components::{Body, BulletState};

        self.world.spawn((
            position,
            velocity,
            Body {
                radius: BULLET_RADIUS,
            },
            BulletState {
                distance_traveled: 0.0,
                max_distance: CIRCLE_RADIUS,
                is_ice,
                is_fire,
                is_homing,
                target_id: None,
                search_cooldown_ms: 0.0,
            },
        ));
    }

    /// Spawn a free-floating fragment (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_fragment(&mut self, position: Position, is_core: bool) {
        use sentinel_core::components::{Body, FragmentState};

        self.world.spawn((
            position,
            Velocity::default(),
            Body {
                radius: FRAGMENT_RADIUS,
            },
            FragmentState {
                is_core,
                moving_to_turret: false,
            },
        ));
    }

    /// Current (progress, threshold) of the level-up counter (for tests).
    #[cfg(test)]
    pub(crate) fn level_progress(&self) -> (u32, u32) {
        (self.progress.progress, self.progress.threshold)
    }
}
