//! Application state shared between the command surface and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use swarm_core::commands::SwarmCommand;
use swarm_core::state::SwarmSnapshot;

/// Messages sent from the command surface to the telemetry loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// An operator command to apply to the engine.
    Swarm(SwarmCommand),
    /// Shut down the loop thread.
    Shutdown,
}

/// Shared application state.
///
/// - `command_tx` is `None` until the loop is started.
/// - `latest_snapshot` is written by the loop after every change and read by
///   synchronous pollers.
#[derive(Default)]
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<SwarmSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
