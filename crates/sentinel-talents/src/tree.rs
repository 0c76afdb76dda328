//! The talent tree: node definitions, upgrade rules, and the bonus
//! mapping handed to the simulation.
//!
//! Upgrades spend accumulated fragments. Cores are tracked as a separate
//! total for future spending surfaces.

use serde::{Deserialize, Serialize};

use sentinel_core::progression::TalentBonuses;

/// Current save payload version.
pub const CURRENT_VERSION: u32 = 1;

/// Fire cooldown reduction per cooldown level (ms).
pub const COOLDOWN_MS_PER_LEVEL: f64 = 150.0;
/// Flat damage per damage level.
pub const DAMAGE_PER_LEVEL: f64 = 2.0;
/// Spawn-interval divisor contribution per spawn-rate level.
pub const SPAWN_BOOST_PER_LEVEL: f64 = 0.2;
/// Bullet speed per bullet-trail level (px per frame).
pub const BULLET_SPEED_PER_LEVEL: f64 = 1.5;
/// Pointer capture radius per magnet level (px).
pub const MAGNET_RANGE_PER_LEVEL: f64 = 20.0;

/// Identifier of a talent tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentId {
    Cooldown,
    BulletTrail,
    Damage,
    SpawnRate,
    FragmentValue,
    MagnetRange,
}

impl TalentId {
    pub const ALL: [TalentId; 6] = [
        TalentId::Cooldown,
        TalentId::BulletTrail,
        TalentId::Damage,
        TalentId::SpawnRate,
        TalentId::FragmentValue,
        TalentId::MagnetRange,
    ];
}

/// Static definition of one talent node.
#[derive(Debug, Clone, Copy)]
pub struct TalentNode {
    pub id: TalentId,
    pub max_level: u32,
    pub cost_per_level: u64,
    pub prerequisite: Option<TalentId>,
}

/// The full tree. Costs and caps are tuned values; do not rebalance.
pub const TALENT_NODES: [TalentNode; 6] = [
    TalentNode {
        id: TalentId::Cooldown,
        max_level: 5,
        cost_per_level: 5,
        prerequisite: None,
    },
    TalentNode {
        id: TalentId::BulletTrail,
        max_level: 3,
        cost_per_level: 25,
        prerequisite: Some(TalentId::Cooldown),
    },
    TalentNode {
        id: TalentId::Damage,
        max_level: 5,
        cost_per_level: 10,
        prerequisite: None,
    },
    TalentNode {
        id: TalentId::SpawnRate,
        max_level: 5,
        cost_per_level: 5,
        prerequisite: None,
    },
    TalentNode {
        id: TalentId::FragmentValue,
        max_level: 3,
        cost_per_level: 30,
        prerequisite: Some(TalentId::SpawnRate),
    },
    TalentNode {
        id: TalentId::MagnetRange,
        max_level: 3,
        cost_per_level: 25,
        prerequisite: Some(TalentId::SpawnRate),
    },
];

/// Look up the static node for an id.
pub fn node(id: TalentId) -> &'static TalentNode {
    // TALENT_NODES covers every TalentId variant.
    TALENT_NODES
        .iter()
        .find(|n| n.id == id)
        .unwrap_or(&TALENT_NODES[0])
}

/// Per-node levels. Every field defaults to zero so a payload written by
/// an older build (or missing nodes entirely) still loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentLevels {
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub bullet_trail: u32,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub spawn_rate: u32,
    #[serde(default)]
    pub fragment_value: u32,
    #[serde(default)]
    pub magnet_range: u32,
}

impl TalentLevels {
    pub fn level(&self, id: TalentId) -> u32 {
        match id {
            TalentId::Cooldown => self.cooldown,
            TalentId::BulletTrail => self.bullet_trail,
            TalentId::Damage => self.damage,
            TalentId::SpawnRate => self.spawn_rate,
            TalentId::FragmentValue => self.fragment_value,
            TalentId::MagnetRange => self.magnet_range,
        }
    }

    fn level_mut(&mut self, id: TalentId) -> &mut u32 {
        match id {
            TalentId::Cooldown => &mut self.cooldown,
            TalentId::BulletTrail => &mut self.bullet_trail,
            TalentId::Damage => &mut self.damage,
            TalentId::SpawnRate => &mut self.spawn_rate,
            TalentId::FragmentValue => &mut self.fragment_value,
            TalentId::MagnetRange => &mut self.magnet_range,
        }
    }
}

/// Why an upgrade was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeError {
    MaxLevel,
    PrerequisiteLocked,
    InsufficientFragments,
}

impl std::fmt::Display for UpgradeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpgradeError::MaxLevel => write!(f, "talent is already at max level"),
            UpgradeError::PrerequisiteLocked => write!(f, "prerequisite talent not unlocked"),
            UpgradeError::InsufficientFragments => write!(f, "not enough fragments"),
        }
    }
}

impl std::error::Error for UpgradeError {}

/// Persistent progression state, serialized as the save payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentState {
    #[serde(default)]
    pub levels: TalentLevels,
    #[serde(default)]
    pub total_fragments: u64,
    #[serde(default)]
    pub total_cores: u64,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for TalentState {
    fn default() -> Self {
        Self {
            levels: TalentLevels::default(),
            total_fragments: 0,
            total_cores: 0,
            version: CURRENT_VERSION,
        }
    }
}

impl TalentState {
    /// Bank the end-of-run haul. Called once per game over.
    pub fn add_currency(&mut self, fragments: u64, cores: u64) {
        self.total_fragments += fragments;
        self.total_cores += cores;
    }

    /// Fragment cost of the next level: `cost_per_level * (level + 1)`.
    pub fn upgrade_cost(&self, id: TalentId) -> u64 {
        node(id).cost_per_level * (self.levels.level(id) as u64 + 1)
    }

    /// Buy one level. Checks max level, prerequisite (level >= 1), and
    /// fragment balance; on success deducts the cost and returns the new
    /// level.
    pub fn upgrade(&mut self, id: TalentId) -> Result<u32, UpgradeError> {
        let def = node(id);
        if self.levels.level(id) >= def.max_level {
            return Err(UpgradeError::MaxLevel);
        }
        if let Some(prereq) = def.prerequisite {
            if self.levels.level(prereq) == 0 {
                return Err(UpgradeError::PrerequisiteLocked);
            }
        }
        let cost = self.upgrade_cost(id);
        if self.total_fragments < cost {
            return Err(UpgradeError::InsufficientFragments);
        }
        self.total_fragments -= cost;
        let level = self.levels.level_mut(id);
        *level += 1;
        Ok(*level)
    }

    /// Numeric bonuses for the simulation, derived from current levels.
    pub fn bonuses(&self) -> TalentBonuses {
        TalentBonuses {
            cooldown_reduction_ms: self.levels.cooldown as f64 * COOLDOWN_MS_PER_LEVEL,
            damage_boost: self.levels.damage as f64 * DAMAGE_PER_LEVEL,
            spawn_boost: self.levels.spawn_rate as f64 * SPAWN_BOOST_PER_LEVEL,
            fragment_bonus: self.levels.fragment_value,
            bullet_speed_boost: self.levels.bullet_trail as f64 * BULLET_SPEED_PER_LEVEL,
            magnet_range_boost: self.levels.magnet_range as f64 * MAGNET_RANGE_PER_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_scales_with_level() {
        let mut state = TalentState::default();
        state.total_fragments = 1000;

        assert_eq!(state.upgrade_cost(TalentId::Cooldown), 5);
        assert_eq!(state.upgrade(TalentId::Cooldown), Ok(1));
        assert_eq!(state.upgrade_cost(TalentId::Cooldown), 10);
        assert_eq!(state.upgrade(TalentId::Cooldown), Ok(2));
        assert_eq!(state.total_fragments, 1000 - 5 - 10);
    }

    #[test]
    fn upgrade_stops_at_max_level() {
        let mut state = TalentState::default();
        state.total_fragments = 10_000;

        for expected in 1..=5 {
            assert_eq!(state.upgrade(TalentId::Damage), Ok(expected));
        }
        assert_eq!(state.upgrade(TalentId::Damage), Err(UpgradeError::MaxLevel));
        assert_eq!(state.levels.damage, 5);
    }

    #[test]
    fn prerequisite_gates_branch_nodes() {
        let mut state = TalentState::default();
        state.total_fragments = 10_000;

        assert_eq!(
            state.upgrade(TalentId::BulletTrail),
            Err(UpgradeError::PrerequisiteLocked)
        );
        state.upgrade(TalentId::Cooldown).unwrap();
        assert_eq!(state.upgrade(TalentId::BulletTrail), Ok(1));

        assert_eq!(
            state.upgrade(TalentId::MagnetRange),
            Err(UpgradeError::PrerequisiteLocked)
        );
        state.upgrade(TalentId::SpawnRate).unwrap();
        assert_eq!(state.upgrade(TalentId::MagnetRange), Ok(1));
    }

    #[test]
    fn upgrade_requires_funds() {
        let mut state = TalentState::default();
        state.total_fragments = 4;
        assert_eq!(
            state.upgrade(TalentId::Cooldown),
            Err(UpgradeError::InsufficientFragments)
        );
        state.add_currency(1, 0);
        assert_eq!(state.upgrade(TalentId::Cooldown), Ok(1));
        assert_eq!(state.total_fragments, 0);
    }

    #[test]
    fn cores_accumulate_but_are_not_spent() {
        let mut state = TalentState::default();
        state.add_currency(100, 20);
        state.upgrade(TalentId::Cooldown).unwrap();
        assert_eq!(state.total_cores, 20);
    }

    #[test]
    fn bonuses_map_levels_linearly() {
        let mut state = TalentState::default();
        state.levels = TalentLevels {
            cooldown: 3,
            bullet_trail: 2,
            damage: 4,
            spawn_rate: 5,
            fragment_value: 1,
            magnet_range: 2,
        };

        let bonuses = state.bonuses();
        assert_eq!(bonuses.cooldown_reduction_ms, 450.0);
        assert_eq!(bonuses.bullet_speed_boost, 3.0);
        assert_eq!(bonuses.damage_boost, 8.0);
        assert_eq!(bonuses.spawn_boost, 1.0);
        assert_eq!(bonuses.fragment_bonus, 1);
        assert_eq!(bonuses.magnet_range_boost, 40.0);
    }

    #[test]
    fn fresh_state_has_zero_bonuses() {
        let bonuses = TalentState::default().bonuses();
        assert_eq!(bonuses.cooldown_reduction_ms, 0.0);
        assert_eq!(bonuses.damage_boost, 0.0);
        assert_eq!(bonuses.spawn_boost, 0.0);
        assert_eq!(bonuses.fragment_bonus, 0);
        assert_eq!(bonuses.bullet_speed_boost, 0.0);
        assert_eq!(bonuses.magnet_range_boost, 0.0);
    }

    #[test]
    fn every_id_has_a_node() {
        for id in TalentId::ALL {
            assert_eq!(node(id).id, id);
        }
    }
}
