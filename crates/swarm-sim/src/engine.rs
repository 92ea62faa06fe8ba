//! Swarm engine — the stateful core of the dashboard.
//!
//! `SwarmState` owns the roster, the mission clock and status, the alert
//! buffer and the seeded RNG. `advance()` processes exactly one tick; the
//! command methods flip pause/stop. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use swarm_core::commands::SwarmCommand;
use swarm_core::enums::MissionStatus;
use swarm_core::error::ConfigError;
use swarm_core::events::Alert;
use swarm_core::state::{MissionView, SwarmMetrics, SwarmSnapshot};
use swarm_core::types::MissionState;

use crate::alerts::{low_battery_message, AlertManager};
use crate::config::SwarmConfig;
use crate::metrics;
use crate::motion::MotionModel;
use crate::roster;
use crate::snapshot;
use crate::vehicle::Vehicle;

/// The swarm engine. Owns every piece of mutable simulation state.
///
/// Generic over the perturbation source; the default is a seeded ChaCha8.
pub struct SwarmState<R: Rng = ChaCha8Rng> {
    vehicles: Vec<Vehicle>,
    mission: MissionState,
    alerts: AlertManager,
    motion: MotionModel,
    rng: R,
    low_battery_threshold: f64,
    mission_duration_ticks: u64,
    command_queue: VecDeque<SwarmCommand>,
}

impl SwarmState {
    /// Build an engine from a config, rejecting invalid configurations.
    /// Perturbations are drawn from a ChaCha8 stream seeded with `config.seed`.
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SwarmState<R> {
    /// Build an engine with an explicitly supplied generator.
    /// `config.seed` is ignored.
    pub fn with_rng(config: SwarmConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let vehicles = roster::spawn_roster(&config.roster);
        tracing::info!(
            target: "swarm::engine",
            vehicles = vehicles.len(),
            mission_duration_ticks = config.mission_duration_ticks,
            "swarm.created"
        );

        Ok(Self {
            vehicles,
            mission: MissionState::default(),
            alerts: AlertManager::new(),
            motion: MotionModel::new(config.drain_per_tick),
            rng,
            low_battery_threshold: config.low_battery_threshold,
            mission_duration_ticks: config.mission_duration_ticks,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SwarmCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SwarmCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, then at most one tick.
    /// Returns whether a tick was processed.
    pub fn advance(&mut self) -> bool {
        self.process_commands();

        if !self.mission.is_running() {
            return false;
        }

        let tick = self.mission.time.next_tick();
        for vehicle in &mut self.vehicles {
            let (position, battery_level) =
                self.motion
                    .step(vehicle.position, vehicle.battery_level, &mut self.rng);
            vehicle.apply_step(position, battery_level, tick);

            if battery_level < self.low_battery_threshold {
                tracing::warn!(
                    target: "swarm::alerts",
                    vehicle = %vehicle.id,
                    battery = battery_level,
                    tick,
                    "battery.low"
                );
                self.alerts
                    .raise(low_battery_message(&vehicle.id, battery_level), tick);
            }
        }

        self.mission.time.advance();
        true
    }

    /// Apply a command immediately.
    pub fn apply(&mut self, command: SwarmCommand) {
        match command {
            SwarmCommand::Pause => self.pause(),
            SwarmCommand::Resume => self.resume(),
            SwarmCommand::TogglePause => {
                if self.mission.paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
            SwarmCommand::Stop => self.stop(),
        }
    }

    pub fn pause(&mut self) {
        if !self.mission.paused {
            tracing::info!(
                target: "swarm::engine",
                elapsed_ticks = self.mission.elapsed_ticks(),
                "mission.paused"
            );
        }
        self.mission.paused = true;
    }

    /// Clear the pause flag. A completed mission stays paused.
    pub fn resume(&mut self) {
        if self.mission.status == MissionStatus::Complete {
            tracing::debug!(target: "swarm::engine", "mission.resume_ignored=complete");
            return;
        }
        if self.mission.paused {
            tracing::info!(
                target: "swarm::engine",
                elapsed_ticks = self.mission.elapsed_ticks(),
                "mission.resumed"
            );
        }
        self.mission.paused = false;
    }

    /// Complete the mission. Terminal; implies paused.
    pub fn stop(&mut self) {
        if self.mission.status != MissionStatus::Complete {
            tracing::info!(
                target: "swarm::engine",
                elapsed_ticks = self.mission.elapsed_ticks(),
                alerts_raised = self.alerts.total_raised(),
                "mission.complete"
            );
        }
        self.mission.status = MissionStatus::Complete;
        self.mission.paused = true;
    }

    /// Vehicles in creation order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Alerts, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.snapshot()
    }

    pub fn alert_manager(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn mission(&self) -> MissionState {
        self.mission
    }

    pub fn mission_view(&self) -> MissionView {
        snapshot::build_mission_view(&self.mission)
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.mission.elapsed_ticks()
    }

    pub fn is_paused(&self) -> bool {
        self.mission.paused
    }

    pub fn mission_duration_ticks(&self) -> u64 {
        self.mission_duration_ticks
    }

    /// Fleet metrics, recomputed on every call.
    pub fn metrics(&self) -> SwarmMetrics {
        metrics::compute(
            &self.vehicles,
            self.mission.elapsed_ticks(),
            self.mission_duration_ticks,
        )
    }

    /// Full read-only view for the presentation layer.
    pub fn snapshot(&self) -> SwarmSnapshot {
        snapshot::build_snapshot(&self.vehicles, &self.mission, &self.alerts, self.metrics())
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply(command);
        }
    }
}
