//! Alert manager.
//!
//! Keeps the `ALERT_CAPACITY` most recent alerts. Ids are assigned from a
//! session counter, so an id is never reused even after its alert is evicted.
//! The threshold policy lives in the engine; this type only records.

use swarm_core::constants::ALERT_CAPACITY;
use swarm_core::events::Alert;
use swarm_core::ring::RingBuffer;

#[derive(Debug, Clone)]
pub struct AlertManager {
    alerts: RingBuffer<Alert, ALERT_CAPACITY>,
    next_id: u64,
}

impl Default for AlertManager {
    fn default() -> Self {
        Self {
            alerts: RingBuffer::new(),
            next_id: 1,
        }
    }
}

impl AlertManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new alert raised on `tick`. Returns its id.
    pub fn raise(&mut self, message: impl Into<String>, tick: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            tick,
            message: message.into(),
        });
        id
    }

    /// Alerts oldest first.
    pub fn snapshot(&self) -> Vec<Alert> {
        self.alerts.to_vec()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Alerts raised over the whole session, including evicted ones.
    pub fn total_raised(&self) -> u64 {
        self.next_id - 1
    }
}

/// Message for a vehicle under the low-battery threshold.
pub fn low_battery_message(vehicle_id: &str, battery_level: f64) -> String {
    format!("Low battery warning for {vehicle_id}: {battery_level:.1}%")
}
