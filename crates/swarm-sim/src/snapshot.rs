//! Snapshot builder.
//!
//! Reads engine state and assembles the `SwarmSnapshot` handed to the
//! presentation layer. Read-only.

use swarm_core::state::{MissionView, SwarmMetrics, SwarmSnapshot, VehicleView};
use swarm_core::types::MissionState;

use crate::alerts::AlertManager;
use crate::vehicle::Vehicle;

pub fn build_snapshot(
    vehicles: &[Vehicle],
    mission: &MissionState,
    alerts: &AlertManager,
    metrics: SwarmMetrics,
) -> SwarmSnapshot {
    SwarmSnapshot {
        mission: build_mission_view(mission),
        vehicles: vehicles.iter().map(build_vehicle_view).collect(),
        alerts: alerts.snapshot(),
        metrics,
    }
}

pub fn build_mission_view(mission: &MissionState) -> MissionView {
    MissionView {
        status: mission.status,
        elapsed_ticks: mission.time.elapsed_ticks,
        paused: mission.paused,
        clock_label: mission.time.clock_label(),
    }
}

pub fn build_vehicle_view(vehicle: &Vehicle) -> VehicleView {
    VehicleView {
        id: vehicle.id.clone(),
        position: vehicle.position,
        battery_level: vehicle.battery_level,
        battery_band: vehicle.battery_band(),
        status: vehicle.status,
        history: vehicle.history.snapshot(),
    }
}
