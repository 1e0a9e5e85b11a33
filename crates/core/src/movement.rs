//! Velocity integrator.
//!
//! Explicit-Euler, one step per tick: holding a direction accelerates toward
//! the max velocity, releasing it decelerates toward zero. Axes are independent.

use crate::types::{bound, sub_mag, Loc, DEFAULT_ACCELERATION, DEFAULT_MAX_VELOCITY};

/// Advance one velocity component by a single tick.
///
/// - `dir`: held direction on this axis, one of `-1`, `0`, `1`
/// - `vel`: current velocity
/// - `acc`: acceleration per tick
/// - `max_vel`: velocity magnitude cap
pub fn update_vel(dir: i32, vel: i32, acc: i32, max_vel: i32) -> i32 {
    if dir != 0 {
        bound(max_vel, vel + acc * dir)
    } else {
        sub_mag(vel, acc)
    }
}

/// Movement state owned by a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Velocity vector in world units per tick.
    pub velocity: Loc,
    pub acceleration: i32,
    pub max_velocity: i32,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            velocity: Loc::ORIGIN,
            acceleration: DEFAULT_ACCELERATION,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

impl Movement {
    /// Apply one tick of acceleration toward `dir`.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `dir` is outside `-1..=1`.
    pub fn update(&mut self, dir: Loc) {
        assert!(dir.x.abs() <= 1, "direction x out of range: {}", dir.x);
        assert!(dir.y.abs() <= 1, "direction y out of range: {}", dir.y);
        self.velocity.x = update_vel(dir.x, self.velocity.x, self.acceleration, self.max_velocity);
        self.velocity.y = update_vel(dir.y, self.velocity.y, self.acceleration, self.max_velocity);
    }

    /// Location reached from `loc` after one tick at the current velocity.
    pub fn next_loc(&self, loc: Loc) -> Loc {
        loc + self.velocity
    }
}
