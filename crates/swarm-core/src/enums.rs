//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{BATTERY_LOW_BAND, BATTERY_NOMINAL_BAND};

/// Presentation-facing vehicle status. Assigned at creation; the engine
/// never transitions it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Initializing,
    Active,
    Warning,
    Error,
}

/// Mission lifecycle. `Complete` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    #[default]
    Active,
    Complete,
}

/// Coarse battery band used to colour the battery gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryBand {
    /// Above 50%.
    Nominal,
    /// Above 20%, up to 50%.
    Low,
    /// 20% and below.
    Critical,
}

impl BatteryBand {
    pub fn from_level(level: f64) -> Self {
        if level > BATTERY_NOMINAL_BAND {
            BatteryBand::Nominal
        } else if level > BATTERY_LOW_BAND {
            BatteryBand::Low
        } else {
            BatteryBand::Critical
        }
    }
}
