//! Engine configuration.
//!
//! Every field has a built-in default; a JSON file may override any subset.
//! `validate` is the single gate for construction-time invariants.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use swarm_core::constants::*;
use swarm_core::enums::VehicleStatus;
use swarm_core::error::ConfigError;
use swarm_core::types::Position;

/// Environment variable naming an optional config file.
pub const CONFIG_PATH_ENV: &str = "SWARM_CONFIG_PATH";

/// Initial state of one roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub id: String,
    pub position: Position,
    pub battery_level: f64,
    #[serde(default)]
    pub status: VehicleStatus,
}

impl VehicleSpec {
    pub fn new(
        id: impl Into<String>,
        position: Position,
        battery_level: f64,
        status: VehicleStatus,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            battery_level,
            status,
        }
    }
}

/// Configuration for starting a new swarm session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Wall-clock period of one tick.
    pub tick_period_ms: i64,
    pub drain_per_tick: f64,
    pub low_battery_threshold: f64,
    pub mission_duration_ticks: u64,
    /// Fixed roster, in creation order.
    pub roster: Vec<VehicleSpec>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            drain_per_tick: BATTERY_DRAIN_PER_TICK,
            low_battery_threshold: LOW_BATTERY_THRESHOLD,
            mission_duration_ticks: MISSION_DURATION_TICKS,
            roster: crate::roster::default_roster(),
        }
    }
}

impl SwarmConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SwarmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms <= 0 {
            return Err(ConfigError::NonPositiveTickPeriod(self.tick_period_ms));
        }
        if !self.drain_per_tick.is_finite() || self.drain_per_tick < 0.0 {
            return Err(ConfigError::InvalidDrain(self.drain_per_tick));
        }
        if !(BATTERY_MIN..=BATTERY_MAX).contains(&self.low_battery_threshold) {
            return Err(ConfigError::InvalidThreshold(self.low_battery_threshold));
        }
        if self.mission_duration_ticks == 0 {
            return Err(ConfigError::ZeroMissionDuration);
        }
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }

        let mut seen = HashSet::with_capacity(self.roster.len());
        for spec in &self.roster {
            if !seen.insert(spec.id.as_str()) {
                return Err(ConfigError::DuplicateVehicleId(spec.id.clone()));
            }
            // NaN fails the range check as well
            if !(BATTERY_MIN..=BATTERY_MAX).contains(&spec.battery_level) {
                return Err(ConfigError::BatteryOutOfRange {
                    id: spec.id.clone(),
                    level: spec.battery_level,
                });
            }
            if !spec.position.is_finite() {
                return Err(ConfigError::NonFinitePosition(spec.id.clone()));
            }
        }
        Ok(())
    }
}

/// Load the config named by `SWARM_CONFIG_PATH`, falling back to the
/// built-in defaults.
pub fn load_config_from_env() -> SwarmConfig {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
        match SwarmConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "swarm::config",
                    path = %path.display(),
                    "swarm_config.loaded=file"
                );
                return config;
            }
            Err(err) => {
                tracing::warn!(
                    target: "swarm::config",
                    path = %path.display(),
                    error = %err,
                    "swarm_config.load_failed"
                );
            }
        }
    }

    tracing::info!(target: "swarm::config", "swarm_config.loaded=builtin");
    SwarmConfig::default()
}
