//! Difficulty model — pure functions mapping survival time and modifiers
//! to the meteorite spawn interval and the off-screen spawn radius.
//!
//! The pacing guarantee: the spawn interval is monotonically non-increasing
//! in survival time and never drops below `MIN_SPAWN_INTERVAL_MS`.

use sentinel_core::constants::{
    METEORITE_SPAWN_INTERVAL_MS, MIN_SPAWN_INTERVAL_MS, SPAWN_DISTANCE_MARGIN,
};

/// Current spawn interval in milliseconds.
///
/// `time_factor = 1 + t/12 + (t/60)^1.5` accelerates spawning over survival
/// time; `spawn_boost` (talent) and `perk_mult` (run perks) accelerate it
/// further. Floored at 350 ms.
pub fn spawn_interval_ms(survival_secs: f64, spawn_boost: f64, perk_mult: f64) -> f64 {
    let time_factor = 1.0 + survival_secs / 12.0 + (survival_secs / 60.0).powf(1.5);
    let base_interval = METEORITE_SPAWN_INTERVAL_MS / (1.0 + spawn_boost);
    (base_interval / (perk_mult * time_factor)).max(MIN_SPAWN_INTERVAL_MS)
}

/// Radius of the spawn circle: half the screen diagonal plus a safety
/// margin, so spawns are off-screen for any aspect ratio.
pub fn spawn_radius(width: f64, height: f64) -> f64 {
    (width * width + height * height).sqrt() / 2.0 + SPAWN_DISTANCE_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interval_starts_at_base() {
        let interval = spawn_interval_ms(0.0, 0.0, 1.0);
        assert!((interval - METEORITE_SPAWN_INTERVAL_MS).abs() < 1e-9);
    }

    #[test]
    fn test_interval_floor() {
        // Ten minutes in, the curve is far past the floor.
        assert_eq!(spawn_interval_ms(600.0, 0.0, 1.0), MIN_SPAWN_INTERVAL_MS);
        assert_eq!(spawn_interval_ms(600.0, 1.0, 3.0), MIN_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_boost_and_perks_accelerate() {
        let base = spawn_interval_ms(10.0, 0.0, 1.0);
        assert!(spawn_interval_ms(10.0, 0.4, 1.0) < base);
        assert!(spawn_interval_ms(10.0, 0.0, 1.5) < base);
    }

    #[test]
    fn test_spawn_radius_clears_screen() {
        for (w, h) in [(800.0, 600.0), (1920.0, 1080.0), (500.0, 2000.0)] {
            let radius = spawn_radius(w, h);
            // Farther than any screen corner from the center.
            let corner = (w * w + h * h).sqrt() / 2.0;
            assert!(radius > corner);
        }
    }

    proptest! {
        #[test]
        fn prop_interval_monotone_non_increasing(
            t1 in 0.0f64..900.0,
            dt in 0.0f64..900.0,
            boost in 0.0f64..1.0,
            perk in 1.0f64..3.5,
        ) {
            let earlier = spawn_interval_ms(t1, boost, perk);
            let later = spawn_interval_ms(t1 + dt, boost, perk);
            prop_assert!(later <= earlier + 1e-9);
        }

        #[test]
        fn prop_interval_never_below_floor(
            t in 0.0f64..10_000.0,
            boost in 0.0f64..1.0,
            perk in 1.0f64..3.5,
        ) {
            prop_assert!(spawn_interval_ms(t, boost, perk) >= MIN_SPAWN_INTERVAL_MS);
        }
    }
}
