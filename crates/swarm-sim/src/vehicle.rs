//! A single simulated vehicle.
//!
//! Fields are only writable from inside the crate so that the battery range
//! invariant is kept by the engine alone.

use swarm_core::enums::{BatteryBand, VehicleStatus};
use swarm_core::events::AltitudeSample;
use swarm_core::types::Position;

use crate::config::VehicleSpec;
use crate::history::HistoryBuffer;

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub(crate) id: String,
    pub(crate) position: Position,
    pub(crate) battery_level: f64,
    pub(crate) status: VehicleStatus,
    pub(crate) history: HistoryBuffer,
}

impl Vehicle {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    pub fn battery_band(&self) -> BatteryBand {
        BatteryBand::from_level(self.battery_level)
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Apply one tick's motion result and record the altitude sample.
    pub(crate) fn apply_step(&mut self, position: Position, battery_level: f64, tick: u64) {
        self.position = position;
        self.battery_level = battery_level;
        self.history.append(AltitudeSample {
            tick,
            altitude: position.z,
        });
    }
}

impl From<&VehicleSpec> for Vehicle {
    fn from(spec: &VehicleSpec) -> Self {
        Self {
            id: spec.id.clone(),
            position: spec.position,
            battery_level: spec.battery_level,
            status: spec.status,
            history: HistoryBuffer::new(),
        }
    }
}
