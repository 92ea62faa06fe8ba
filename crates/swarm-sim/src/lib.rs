//! Swarm telemetry engine.
//!
//! Owns the vehicle roster, advances it one tick at a time, keeps the bounded
//! altitude and alert series, and produces `SwarmSnapshot`s for the
//! presentation layer. Completely headless, enabling deterministic testing.

pub mod alerts;
pub mod clock;
pub mod config;
pub mod engine;
pub mod history;
pub mod metrics;
pub mod motion;
pub mod roster;
pub mod snapshot;
pub mod vehicle;

pub use swarm_core as core;
pub use engine::SwarmState;

#[cfg(test)]
mod tests;
