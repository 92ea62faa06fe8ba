//! Telemetry loop thread — drives the engine from the wall clock.
//!
//! The engine and clock are built on the caller's thread so configuration
//! errors surface before anything is spawned. Commands arrive over `mpsc`
//! and are applied between ticks; every state change is published to the
//! shared snapshot slot and to the caller's sink.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use swarm_core::state::SwarmSnapshot;
use swarm_sim::clock::Clock;
use swarm_sim::config::SwarmConfig;
use swarm_sim::SwarmState;

use crate::error::AppError;
use crate::state::LoopCommand;

/// How long to block on the command channel while the clock is paused.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Spawns the telemetry loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_telemetry_loop<F>(
    config: SwarmConfig,
    latest_snapshot: Arc<Mutex<Option<SwarmSnapshot>>>,
    emit: F,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>), AppError>
where
    F: FnMut(&SwarmSnapshot) + Send + 'static,
{
    let clock = Clock::new(config.tick_period_ms)?;
    let engine = SwarmState::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("swarm-telemetry-loop".into())
        .spawn(move || {
            run_telemetry_loop(engine, clock, cmd_rx, &latest_snapshot, emit);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_telemetry_loop<F>(
    mut engine: SwarmState,
    mut clock: Clock,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SwarmSnapshot>>,
    mut emit: F,
) where
    F: FnMut(&SwarmSnapshot),
{
    clock.start(Instant::now());
    publish(&engine, latest_snapshot, &mut emit);

    loop {
        // 1. Wait for a command or the next tick boundary
        let wait = clock
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT);

        match cmd_rx.recv_timeout(wait) {
            Ok(LoopCommand::Swarm(cmd)) => {
                engine.apply(cmd);
                sync_clock(&engine, &mut clock);
                publish(&engine, latest_snapshot, &mut emit);
            }
            Ok(LoopCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                tracing::info!(
                    target: "swarm::loop",
                    elapsed_ticks = engine.elapsed_ticks(),
                    "telemetry_loop.shutdown"
                );
                return;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        // 2. Process every tick boundary crossed
        let ticks = clock.poll(Instant::now());
        if ticks > 1 {
            tracing::debug!(target: "swarm::loop", ticks, "clock.catch_up");
        }
        let mut processed = false;
        for _ in 0..ticks {
            processed |= engine.advance();
        }

        // 3. Publish
        if processed {
            publish(&engine, latest_snapshot, &mut emit);
        }
    }
}

/// Keep the clock's pause state in line with the mission's.
fn sync_clock(engine: &SwarmState, clock: &mut Clock) {
    if engine.is_paused() {
        clock.pause();
    } else {
        clock.resume(Instant::now());
    }
}

fn publish<F>(engine: &SwarmState, latest_snapshot: &Mutex<Option<SwarmSnapshot>>, emit: &mut F)
where
    F: FnMut(&SwarmSnapshot),
{
    let snapshot = engine.snapshot();
    emit(&snapshot);
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}
