//! Homing guidance for bullets.
//!
//! A homing bullet tracks the nearest live meteorite by squared distance
//! and turns a fixed fraction of the angular error toward it each tick,
//! preserving its speed. With no live target it flies straight.

use sentinel_core::constants::HOMING_TURN_GAIN;
use sentinel_core::types::{wrap_angle, Position, Velocity};

/// A candidate homing target, collected once per tick from the live
/// meteorite set.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate {
    pub id: u32,
    pub position: Position,
}

/// Select the nearest candidate by squared distance. Ties resolve to the
/// first encountered; the order is not gameplay-significant.
pub fn nearest_target(candidates: &[TargetCandidate], from: Position) -> Option<u32> {
    let mut best: Option<u32> = None;
    let mut best_dist_sq = f64::INFINITY;
    for candidate in candidates {
        let dist_sq = from.distance_sq_to(&candidate.position);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(candidate.id);
        }
    }
    best
}

/// Apply one tick of proportional steering toward the target.
/// The angular error is wrapped into (-π, π] before the gain is applied,
/// so the bullet always turns the short way around.
pub fn steer(velocity: Velocity, from: Position, target: Position) -> Velocity {
    let desired = from.angle_to(&target);
    let current = velocity.heading();
    let error = wrap_angle(desired - current);
    Velocity::from_heading(current + error * HOMING_TURN_GAIN, velocity.speed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steer_preserves_speed() {
        let vel = Velocity::from_heading(0.0, 3.5);
        let steered = steer(vel, Position::new(0.0, 0.0), Position::new(-10.0, -10.0));
        assert!((steered.speed() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_steer_converges_on_stationary_target() {
        // Bullet starts heading due east; target sits to the north-west.
        let mut pos = Position::new(100.0, 100.0);
        let mut vel = Velocity::from_heading(0.0, 3.5);
        let target = Position::new(0.0, 0.0);

        let mut min_dist = f64::MAX;
        for _ in 0..400 {
            vel = steer(vel, pos, target);
            pos.x += vel.x;
            pos.y += vel.y;
            min_dist = min_dist.min(pos.distance_to(&target));
        }
        assert!(
            min_dist < 5.0,
            "homing should converge on a stationary target, min dist {min_dist:.1}"
        );
    }

    #[test]
    fn test_steer_takes_short_way_around() {
        // Heading just below +π, target just above -π: the short way is
        // through the wrap, not back through zero.
        let vel = Velocity::from_heading(3.0, 1.0);
        let from = Position::new(0.0, 0.0);
        let target_heading: f64 = -3.0;
        let target = Position::new(target_heading.cos() * 50.0, target_heading.sin() * 50.0);
        let steered = steer(vel, from, target);
        assert!(
            steered.heading() > 3.0 || steered.heading() < -3.0,
            "expected wrap-through steering, got heading {}",
            steered.heading()
        );
    }

    #[test]
    fn test_nearest_target_picks_closest() {
        let candidates = vec![
            TargetCandidate { id: 1, position: Position::new(100.0, 0.0) },
            TargetCandidate { id: 2, position: Position::new(10.0, 0.0) },
            TargetCandidate { id: 3, position: Position::new(50.0, 0.0) },
        ];
        assert_eq!(nearest_target(&candidates, Position::new(0.0, 0.0)), Some(2));
        assert_eq!(nearest_target(&[], Position::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_nearest_target_tie_takes_first() {
        let candidates = vec![
            TargetCandidate { id: 7, position: Position::new(0.0, 10.0) },
            TargetCandidate { id: 8, position: Position::new(10.0, 0.0) },
        ];
        assert_eq!(nearest_target(&candidates, Position::new(0.0, 0.0)), Some(7));
    }
}
