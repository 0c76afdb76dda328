//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in screen space (pixels per frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation clock tracking. Both clocks advance by the host-supplied
/// elapsed milliseconds; they are suspended while the game is paused.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameClock {
    /// Total active game time in milliseconds.
    pub game_ms: f64,
    /// Survival time for the current playthrough in milliseconds.
    /// Drives the difficulty curve.
    pub survival_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance_sq_to(other).sqrt()
    }

    /// Squared distance — used for proximity tests to avoid the sqrt.
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle from this position toward another (radians, atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity with the given heading and speed magnitude.
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self {
            x: heading.cos() * speed,
            y: heading.sin() * speed,
        }
    }

    /// Speed magnitude (pixels per frame).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Heading in radians (atan2 convention).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl GameClock {
    /// Advance both clocks by the elapsed milliseconds.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.game_ms += elapsed_ms;
        self.survival_ms += elapsed_ms;
    }

    /// Whole survival seconds, as shown on the HUD.
    pub fn survival_secs(&self) -> u64 {
        (self.survival_ms / 1000.0) as u64
    }
}

/// Wrap an angular difference into (-π, π].
pub fn wrap_angle(mut angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    while angle < -PI {
        angle += TAU;
    }
    while angle > PI {
        angle -= TAU;
    }
    angle
}
