use std::io;

use thiserror::Error;

use swarm_core::error::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn telemetry loop thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("telemetry loop already running")]
    AlreadyRunning,
    #[error("telemetry loop not started")]
    NotStarted,
    #[error("telemetry loop has shut down")]
    LoopClosed,
    #[error("shared state lock poisoned")]
    Poisoned,
}
