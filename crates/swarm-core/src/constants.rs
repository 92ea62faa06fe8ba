//! Simulation constants and tuning parameters.

/// Default wall-clock period of one tick (milliseconds).
pub const DEFAULT_TICK_PERIOD_MS: i64 = 1000;

/// Default ChaCha seed for motion perturbations.
pub const DEFAULT_SEED: u64 = 42;

// --- Buffers ---

/// Altitude samples retained per vehicle.
pub const HISTORY_CAPACITY: usize = 20;

/// Alerts retained by the alert manager.
pub const ALERT_CAPACITY: usize = 5;

// --- Motion ---

/// Horizontal (x, y) perturbation is uniform over [-XY_JITTER, XY_JITTER].
pub const XY_JITTER: f64 = 1.0;

/// Vertical (z) perturbation is uniform over [-Z_JITTER, Z_JITTER].
pub const Z_JITTER: f64 = 0.5;

// --- Battery ---

pub const BATTERY_MIN: f64 = 0.0;
pub const BATTERY_MAX: f64 = 100.0;

/// Percentage points drained per tick.
pub const BATTERY_DRAIN_PER_TICK: f64 = 0.1;

/// Alerts fire while battery is strictly below this level.
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

/// Gauge bands.
pub const BATTERY_NOMINAL_BAND: f64 = 50.0;
pub const BATTERY_LOW_BAND: f64 = 20.0;

// --- Mission ---

/// Length of the mission window used for progress.
pub const MISSION_DURATION_TICKS: u64 = 300;
