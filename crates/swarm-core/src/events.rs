//! Records produced by the engine each tick.

use serde::{Deserialize, Serialize};

/// Alert for the UI alert queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Session-unique, strictly increasing.
    pub id: u64,
    /// Tick the alert was raised on.
    pub tick: u64,
    pub message: String,
}

/// One point of a vehicle's altitude trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeSample {
    pub tick: u64,
    pub altitude: f64,
}
