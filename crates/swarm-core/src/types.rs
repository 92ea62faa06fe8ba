//! Fundamental geometric and mission-time types.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::MissionStatus;

/// 3D position in simulation space.
/// z is interpreted as altitude. No bounds are imposed on any axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        self.as_dvec3().length()
    }

    /// Offset this position by a per-axis delta.
    pub fn offset(&self, delta: DVec3) -> Self {
        let moved = self.as_dvec3() + delta;
        Self::new(moved.x, moved.y, moved.z)
    }

    pub fn is_finite(&self) -> bool {
        self.as_dvec3().is_finite()
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Two-decimal rendering used by the vehicle cards: `"1.00, -2.50, 3.25"`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}, {:.2}", self.x, self.y, self.z)
    }
}

/// Mission time, counted in processed ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionTime {
    /// Number of ticks processed so far. Never decremented.
    pub elapsed_ticks: u64,
}

impl MissionTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.elapsed_ticks += 1;
    }

    /// The tick number the next processed tick will carry.
    pub fn next_tick(&self) -> u64 {
        self.elapsed_ticks + 1
    }

    /// Mission clock as shown on the dashboard, one second per tick: `"2m 5s"`.
    pub fn clock_label(&self) -> String {
        format!("{}m {}s", self.elapsed_ticks / 60, self.elapsed_ticks % 60)
    }
}

/// Mission lifecycle state owned by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionState {
    pub status: MissionStatus,
    pub time: MissionTime,
    pub paused: bool,
}

impl MissionState {
    /// Whether `advance()` would process a tick in this state.
    pub fn is_running(&self) -> bool {
        !self.paused && self.status == MissionStatus::Active
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.time.elapsed_ticks
    }
}
