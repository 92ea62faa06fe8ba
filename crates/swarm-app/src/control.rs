//! Command surface for the host.
//!
//! Bridges operator input (the dashboard's pause/resume/stop buttons, here a
//! line-oriented console) to the telemetry loop thread via channels.

use swarm_core::commands::SwarmCommand;
use swarm_core::state::SwarmSnapshot;
use swarm_sim::config::SwarmConfig;

use crate::error::AppError;
use crate::state::{AppState, LoopCommand};
use crate::telemetry_loop;

/// Start the telemetry loop. Fails if it is already running.
pub fn start_loop<F>(state: &AppState, config: SwarmConfig, emit: F) -> Result<(), AppError>
where
    F: FnMut(&SwarmSnapshot) + Send + 'static,
{
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        telemetry_loop::spawn_telemetry_loop(config, state.latest_snapshot.clone(), emit)?;
    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
    Ok(())
}

/// Forward a command to the loop thread.
pub fn send_command(state: &AppState, command: LoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::LoopClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Latest published snapshot, for synchronous polling.
pub fn get_snapshot(state: &AppState) -> Result<Option<SwarmSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Ask the loop to shut down and wait for the thread to exit.
pub fn shutdown(state: &AppState) -> Result<(), AppError> {
    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take()
    {
        // The loop may already be gone; joining below is what matters.
        let _ = tx.send(LoopCommand::Shutdown);
    }
    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| AppError::LoopClosed)?;
    }
    Ok(())
}

/// Parse one console line. Accepts a keyword or a JSON-encoded command.
pub fn parse_command(line: &str) -> Option<LoopCommand> {
    let line = line.trim();
    if line.starts_with('{') {
        return serde_json::from_str::<SwarmCommand>(line)
            .ok()
            .map(LoopCommand::Swarm);
    }
    let command = match line.to_ascii_lowercase().as_str() {
        "p" | "pause" => LoopCommand::Swarm(SwarmCommand::Pause),
        "r" | "resume" | "play" => LoopCommand::Swarm(SwarmCommand::Resume),
        "t" | "toggle" => LoopCommand::Swarm(SwarmCommand::TogglePause),
        "s" | "stop" => LoopCommand::Swarm(SwarmCommand::Stop),
        "q" | "quit" | "exit" => LoopCommand::Shutdown,
        _ => return None,
    };
    Some(command)
}
