//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::DT;

/// 2D position in normalized arena space. Both axes live in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle to another position in radians, measured from +x toward +y.
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Unit vector pointing at `other`. Coincident points yield a zero vector.
    pub fn direction_to(&self, other: &Position) -> (f64, f64) {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        normalize(dx, dy)
    }

    /// Move by `step` along `(dx, dy)`, then clamp back into the arena.
    pub fn offset(&self, (dx, dy): (f64, f64), step: f64) -> Position {
        Position::new(self.x + dx * step, self.y + dy * step).clamped()
    }

    /// Move `step` toward `target`.
    pub fn toward(&self, target: &Position, step: f64) -> Position {
        self.offset(self.direction_to(target), step)
    }

    /// Move `step` directly away from `threat`.
    pub fn away_from(&self, threat: &Position, step: f64) -> Position {
        self.offset(threat.direction_to(self), step)
    }

    /// Move `step` perpendicular to the line toward `anchor`.
    pub fn sidestep(&self, anchor: &Position, step: f64) -> Position {
        let dx = anchor.x - self.x;
        let dy = anchor.y - self.y;
        self.offset(normalize(-dy, dx), step)
    }

    /// Clamp both coordinates into [0, 1].
    pub fn clamped(&self) -> Position {
        Position::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }

    /// Whether either coordinate sits within `margin` of an arena wall.
    pub fn near_boundary(&self, margin: f64) -> bool {
        self.x <= margin || self.y <= margin || self.x >= 1.0 - margin || self.y >= 1.0 - margin
    }
}

/// Normalize a vector, guarding against division by zero.
pub fn normalize(dx: f64, dy: f64) -> (f64, f64) {
    let norm = (dx * dx + dy * dy).sqrt() + 1e-8;
    (dx / norm, dy / norm)
}

/// Clamp a pool value (health, armor, ammo, shield) into [0, 1].
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += DT;
    }
}
