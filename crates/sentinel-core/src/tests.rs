#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::constants::*;
    use crate::enums::*;
    use crate::progression::{next_threshold, PerkState};
    use crate::state::GameSnapshot;
    use crate::types::{wrap_angle, Position, Velocity};

    #[test]
    fn test_perk_id_serde() {
        for v in PerkId::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: PerkId = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Playing,
            GamePhase::AwaitingPerkChoice,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_snapshot_default_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Playing);
        assert!(back.meteorites.is_empty());
    }

    #[test]
    fn test_wrap_angle_range() {
        for raw in [-3.0 * PI, -PI - 0.1, -0.5, 0.0, 0.5, PI + 0.1, 5.0 * PI] {
            let wrapped = wrap_angle(raw);
            assert!(wrapped > -PI - 1e-9 && wrapped <= PI + 1e-9, "{raw} -> {wrapped}");
            // Wrapping preserves the direction.
            assert!(((wrapped - raw) / (2.0 * PI)).fract().abs() < 1e-9);
        }
    }

    #[test]
    fn test_velocity_heading_roundtrip() {
        let vel = Velocity::from_heading(1.2, 3.5);
        assert!((vel.speed() - 3.5).abs() < 1e-9);
        assert!((vel.heading() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_distance_sq_matches_distance() {
        let a = Position::new(3.0, 4.0);
        let b = Position::new(0.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert!((a.distance_sq_to(&b) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_growth_strictly_increasing() {
        let mut threshold = INITIAL_UPGRADE_THRESHOLD;
        for _ in 0..20 {
            let grown = next_threshold(threshold);
            assert!(grown > threshold);
            threshold = grown;
        }
    }

    #[test]
    fn test_threshold_growth_first_steps() {
        // floor(5 * 1.5) + 3 = 10, floor(10 * 1.5) + 3 = 18.
        assert_eq!(next_threshold(5), 10);
        assert_eq!(next_threshold(10), 18);
        assert_eq!(next_threshold(18), 30);
    }

    #[test]
    fn test_cooldown_perk_stacks_multiplicatively() {
        let mut perks = PerkState::default();
        perks.apply(PerkId::ReduceCooldown);
        perks.apply(PerkId::ReduceCooldown);
        let expected = BULLET_FIRE_COOLDOWN_MS * 0.8 * 0.8;
        assert!((perks.effective_cooldown_ms(0.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_floor() {
        let mut perks = PerkState::default();
        for _ in 0..30 {
            perks.apply(PerkId::ReduceCooldown);
        }
        assert_eq!(
            perks.effective_cooldown_ms(750.0),
            MIN_FIRE_COOLDOWN_MS,
            "cooldown must never drop below the floor"
        );
    }

    #[test]
    fn test_one_time_perks_leave_offer_pool() {
        let mut perks = PerkState::default();
        assert_eq!(perks.eligible_perks().len(), PerkId::ALL.len());

        perks.apply(PerkId::Homing);
        let eligible = perks.eligible_perks();
        assert!(!eligible.contains(&PerkId::Homing));
        assert_eq!(eligible.len(), PerkId::ALL.len() - 1);

        // Applying again is idempotent.
        perks.apply(PerkId::Homing);
        assert_eq!(perks.owned_one_timers.len(), 1);
        assert!(perks.is_homing);
    }

    #[test]
    fn test_stacking_perks_accumulate() {
        let mut perks = PerkState::default();
        perks.apply(PerkId::ExtraBullet);
        perks.apply(PerkId::ExtraBullet);
        perks.apply(PerkId::IncreaseDamage);
        perks.apply(PerkId::MoreMeteorites);
        assert_eq!(perks.bullets_per_shot, 3);
        assert_eq!(perks.damage_boost, PERK_DAMAGE_BONUS);
        assert_eq!(perks.spawn_rate_mult, 1.0 + PERK_SPAWN_RATE_BONUS);
        // Stacking perks stay in the pool.
        assert!(perks.eligible_perks().contains(&PerkId::ExtraBullet));
    }
}
