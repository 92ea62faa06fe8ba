//! Swarm snapshot — the complete visible state handed to the presentation
//! layer on every read.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, AltitudeSample};
use crate::types::Position;

/// Complete engine state for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwarmSnapshot {
    pub mission: MissionView,
    /// In creation order.
    pub vehicles: Vec<VehicleView>,
    /// Oldest first.
    pub alerts: Vec<Alert>,
    pub metrics: SwarmMetrics,
}

/// Mission control panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionView {
    pub status: MissionStatus,
    pub elapsed_ticks: u64,
    pub paused: bool,
    /// `"Xm Ys"` at one second per tick.
    pub clock_label: String,
}

/// One vehicle card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: String,
    pub position: Position,
    pub battery_level: f64,
    pub battery_band: BatteryBand,
    pub status: VehicleStatus,
    /// Altitude trail, oldest first.
    pub history: Vec<AltitudeSample>,
}

/// Fleet-wide derived metrics. Recomputed on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SwarmMetrics {
    /// Mean of z across vehicles.
    pub average_altitude: f64,
    /// Max minus min distance from the origin.
    pub swarm_spread: f64,
    /// Mean battery level (percent).
    pub average_battery: f64,
    /// Percent of the mission window elapsed, capped at 100.
    pub mission_progress: f64,
}
