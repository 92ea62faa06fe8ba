//! Initial fleet setup.

use swarm_core::enums::VehicleStatus;
use swarm_core::types::Position;

use crate::config::VehicleSpec;
use crate::vehicle::Vehicle;

/// The three-vehicle demonstration fleet.
pub fn default_roster() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec::new(
            "Drone_0",
            Position::new(0.0, 0.0, 0.0),
            100.0,
            VehicleStatus::Initializing,
        ),
        VehicleSpec::new(
            "Drone_1",
            Position::new(10.0, 10.0, 5.0),
            95.0,
            VehicleStatus::Active,
        ),
        VehicleSpec::new(
            "Drone_2",
            Position::new(-5.0, 8.0, 10.0),
            87.0,
            VehicleStatus::Active,
        ),
    ]
}

/// Build vehicles from an already validated roster, preserving order.
pub fn spawn_roster(specs: &[VehicleSpec]) -> Vec<Vehicle> {
    specs.iter().map(Vehicle::from).collect()
}
