//! Headless dashboard host.
//!
//! Wires the swarm engine to a wall-clock tick loop and exposes the
//! pause/resume/stop commands and the latest snapshot to whatever
//! presentation layer sits on top.

pub mod control;
pub mod error;
pub mod state;
pub mod telemetry_loop;

pub use swarm_core as core;
