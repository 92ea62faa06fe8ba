//! Commands sent from the presentation layer to the engine.
//!
//! Commands are either applied immediately or queued for processing at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SwarmCommand {
    /// Suspend tick processing.
    Pause,
    /// Resume tick processing. Ignored once the mission is complete.
    Resume,
    /// Flip between paused and running (the dashboard's play/pause button).
    TogglePause,
    /// Complete the mission. Terminal; implies paused.
    Stop,
}
