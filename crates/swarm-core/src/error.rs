//! Construction-time configuration errors.
//!
//! Once an engine is built there are no runtime errors; everything the engine
//! cannot tolerate is rejected here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("swarm roster is empty; at least one vehicle is required")]
    EmptyRoster,
    #[error("duplicate vehicle id {0:?} in roster")]
    DuplicateVehicleId(String),
    #[error("vehicle {id:?} has battery level {level}, expected a value in [0, 100]")]
    BatteryOutOfRange { id: String, level: f64 },
    #[error("vehicle {0:?} has a non-finite position")]
    NonFinitePosition(String),
    #[error("tick period must be positive, got {0} ms")]
    NonPositiveTickPeriod(i64),
    #[error("battery drain per tick must be finite and non-negative, got {0}")]
    InvalidDrain(f64),
    #[error("low battery threshold must be in [0, 100], got {0}")]
    InvalidThreshold(f64),
    #[error("mission duration must be at least one tick")]
    ZeroMissionDuration,
    #[error("failed to parse swarm config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read swarm config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
