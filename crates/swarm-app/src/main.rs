//! `swarm-dashboard` — headless host for the swarm telemetry engine.
//!
//! Emits one JSON snapshot per line on stdout. Reads operator commands
//! (`pause`, `resume`, `toggle`, `stop`, `quit`, or a JSON command) from stdin.
//! Logs go to stderr; filter with `RUST_LOG`.

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use swarm_app::control;
use swarm_app::state::{AppState, LoopCommand};
use swarm_sim::config::load_config_from_env;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config_from_env();
    let state = AppState::new();

    control::start_loop(&state, config, |snapshot| {
        if let Ok(line) = serde_json::to_string(snapshot) {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    })?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match control::parse_command(&line) {
            Some(LoopCommand::Shutdown) => break,
            Some(command) => control::send_command(&state, command)?,
            None if line.trim().is_empty() => {}
            None => tracing::warn!(target: "swarm::console", input = %line, "command.unknown"),
        }
    }

    control::shutdown(&state)?;
    Ok(())
}
