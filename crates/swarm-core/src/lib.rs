//! Core types and definitions for the swarm telemetry engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, commands, alerts, snapshots, constants and the fixed-capacity
//! ring buffer backing every bounded series. It has no dependency on any
//! runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod ring;
pub mod state;
pub mod types;
