//! Random-walk motion model.
//!
//! Each tick every coordinate takes an independent uniform perturbation and
//! the battery drains by a fixed amount, floored at zero. Position is left
//! unbounded: a vehicle may drift arbitrarily far.

use glam::DVec3;
use rand::Rng;

use swarm_core::constants::{BATTERY_DRAIN_PER_TICK, BATTERY_MIN, XY_JITTER, Z_JITTER};
use swarm_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    drain_per_tick: f64,
}

impl Default for MotionModel {
    fn default() -> Self {
        Self::new(BATTERY_DRAIN_PER_TICK)
    }
}

impl MotionModel {
    pub fn new(drain_per_tick: f64) -> Self {
        Self { drain_per_tick }
    }

    pub fn drain_per_tick(&self) -> f64 {
        self.drain_per_tick
    }

    /// Produce the next position and battery level for one tick.
    /// Pure apart from the draws taken from `rng`.
    pub fn step<R: Rng>(
        &self,
        position: Position,
        battery_level: f64,
        rng: &mut R,
    ) -> (Position, f64) {
        let delta = DVec3::new(
            rng.gen_range(-XY_JITTER..=XY_JITTER),
            rng.gen_range(-XY_JITTER..=XY_JITTER),
            rng.gen_range(-Z_JITTER..=Z_JITTER),
        );
        (position.offset(delta), self.drain(battery_level))
    }

    /// Battery after one tick of drain. Never below zero.
    pub fn drain(&self, battery_level: f64) -> f64 {
        (battery_level - self.drain_per_tick).max(BATTERY_MIN)
    }
}
