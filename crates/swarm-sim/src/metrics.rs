//! Fleet-wide metrics.
//!
//! Pure functions over the current vehicle set; nothing here is cached.
//! An empty set yields 0.0 for every metric.

use swarm_core::state::SwarmMetrics;

use crate::vehicle::Vehicle;

/// Mean altitude (z) across vehicles.
pub fn average_altitude(vehicles: &[Vehicle]) -> f64 {
    mean(vehicles.iter().map(|v| v.position.z), vehicles.len())
}

/// Spread of distances from the origin: max norm minus min norm.
pub fn swarm_spread(vehicles: &[Vehicle]) -> f64 {
    let mut norms = vehicles.iter().map(|v| v.position.norm());
    let Some(first) = norms.next() else {
        return 0.0;
    };
    let (min, max) = norms.fold((first, first), |(min, max), n| (min.min(n), max.max(n)));
    max - min
}

/// Mean battery level across vehicles.
pub fn average_battery(vehicles: &[Vehicle]) -> f64 {
    mean(vehicles.iter().map(|v| v.battery_level), vehicles.len())
}

/// Percent of the mission window elapsed, capped at 100.
pub fn mission_progress(elapsed_ticks: u64, mission_duration_ticks: u64) -> f64 {
    if mission_duration_ticks == 0 {
        return 100.0;
    }
    (elapsed_ticks as f64 / mission_duration_ticks as f64 * 100.0).min(100.0)
}

/// All four metrics at once.
pub fn compute(
    vehicles: &[Vehicle],
    elapsed_ticks: u64,
    mission_duration_ticks: u64,
) -> SwarmMetrics {
    SwarmMetrics {
        average_altitude: average_altitude(vehicles),
        swarm_spread: swarm_spread(vehicles),
        average_battery: average_battery(vehicles),
        mission_progress: mission_progress(elapsed_ticks, mission_duration_ticks),
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}
