//! Tests for the swarm engine: tick orchestration, buffers, alerts, commands
//! and determinism.

use swarm_core::commands::SwarmCommand;
use swarm_core::constants::{ALERT_CAPACITY, HISTORY_CAPACITY};
use swarm_core::enums::{MissionStatus, VehicleStatus};
use swarm_core::error::ConfigError;
use swarm_core::types::Position;

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{SwarmConfig, VehicleSpec};
use crate::engine::SwarmState;

fn engine() -> SwarmState {
    SwarmState::new(SwarmConfig::default()).unwrap()
}

fn engine_with_batteries(levels: &[f64]) -> SwarmState {
    let roster = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            VehicleSpec::new(
                format!("Drone_{i}"),
                Position::default(),
                level,
                VehicleStatus::Active,
            )
        })
        .collect();
    SwarmState::new(SwarmConfig {
        roster,
        ..Default::default()
    })
    .unwrap()
}

fn batteries(engine: &SwarmState) -> Vec<f64> {
    engine.vehicles().iter().map(|v| v.battery_level()).collect()
}

// ---- Construction ----

#[test]
fn test_empty_roster_fails_fast() {
    let result = SwarmState::new(SwarmConfig {
        roster: Vec::new(),
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::EmptyRoster)));
}

#[test]
fn test_initial_state() {
    let engine = engine();
    let mission = engine.mission();
    assert_eq!(mission.status, MissionStatus::Active);
    assert_eq!(mission.elapsed_ticks(), 0);
    assert!(!mission.paused);

    let ids: Vec<&str> = engine.vehicles().iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!["Drone_0", "Drone_1", "Drone_2"]);
    assert_eq!(engine.vehicles()[0].status(), VehicleStatus::Initializing);
    assert!(engine.vehicles().iter().all(|v| v.history().is_empty()));
    assert!(engine.alerts().is_empty());
}

// ---- Tick orchestration ----

#[test]
fn test_single_tick_drains_and_records() {
    let mut engine = engine();
    assert!(engine.advance());

    let expected = [99.9, 94.9, 86.9];
    for (level, want) in batteries(&engine).iter().zip(expected) {
        assert!((level - want).abs() < 1e-9, "battery {level} != {want}");
    }
    for vehicle in engine.vehicles() {
        let history = vehicle.history().snapshot();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].tick, 1);
        assert_eq!(history[0].altitude, vehicle.position().z);
    }
    assert_eq!(engine.elapsed_ticks(), 1);
}

#[test]
fn test_history_after_25_ticks() {
    let mut engine = engine();
    for _ in 0..25 {
        engine.advance();
    }
    for vehicle in engine.vehicles() {
        let ticks: Vec<u64> = vehicle.history().snapshot().iter().map(|s| s.tick).collect();
        assert_eq!(ticks.len(), HISTORY_CAPACITY);
        assert_eq!(ticks, (6..=25).collect::<Vec<_>>());
    }
}

#[test]
fn test_history_bounded_every_tick() {
    let mut engine = engine();
    for _ in 0..60 {
        engine.advance();
        for vehicle in engine.vehicles() {
            let history = vehicle.history().snapshot();
            assert!(history.len() <= HISTORY_CAPACITY);
            assert!(history.windows(2).all(|w| w[1].tick == w[0].tick + 1));
            assert_eq!(history.last().map(|s| s.tick), Some(engine.elapsed_ticks()));
        }
    }
}

#[test]
fn test_positions_move_within_jitter() {
    let mut engine = engine();
    let before: Vec<Position> = engine.vehicles().iter().map(|v| v.position()).collect();
    engine.advance();
    for (vehicle, prev) in engine.vehicles().iter().zip(before) {
        let now = vehicle.position();
        assert!((now.x - prev.x).abs() <= 1.0);
        assert!((now.y - prev.y).abs() <= 1.0);
        assert!((now.z - prev.z).abs() <= 0.5);
    }
}

// ---- Battery ----

#[test]
fn test_battery_non_increasing_and_floored() {
    let mut engine = engine_with_batteries(&[0.35, 3.0, 50.0]);
    let mut previous = batteries(&engine);
    for _ in 0..100 {
        engine.advance();
        let current = batteries(&engine);
        for (now, before) in current.iter().zip(&previous) {
            assert!(now <= before);
            assert!(*now >= 0.0);
        }
        previous = current;
    }
    assert_eq!(engine.vehicles()[0].battery_level(), 0.0);
}

#[test]
fn test_battery_stays_at_zero() {
    let mut engine = engine_with_batteries(&[0.1]);
    engine.advance();
    assert_eq!(engine.vehicles()[0].battery_level(), 0.0);
    for _ in 0..10 {
        engine.advance();
        assert_eq!(engine.vehicles()[0].battery_level(), 0.0);
    }
}

// ---- Alerts ----

#[test]
fn test_crossing_threshold_raises_alert() {
    let mut engine = engine_with_batteries(&[20.05]);
    engine.advance();

    let level = engine.vehicles()[0].battery_level();
    assert!((level - 19.95).abs() < 1e-9);

    let alerts = engine.alerts();
    assert_eq!(alerts.len(), 1);
    let rendered = format!("{level:.1}");
    assert!(rendered == "19.9" || rendered == "20.0");
    assert_eq!(
        alerts[0].message,
        format!("Low battery warning for Drone_0: {rendered}%")
    );
    assert_eq!(alerts[0].tick, 1);
}

#[test]
fn test_no_alert_at_or_above_threshold() {
    let mut engine = engine_with_batteries(&[20.1, 90.0]);
    engine.advance();
    // 20.1 - 0.1 lands on (or a hair off) 20.0; only strictly below counts.
    let level = engine.vehicles()[0].battery_level();
    assert_eq!(engine.alerts().is_empty(), level >= 20.0);

    let mut engine = engine_with_batteries(&[80.0, 90.0]);
    for _ in 0..10 {
        engine.advance();
    }
    assert!(engine.alerts().is_empty());
}

#[test]
fn test_alert_fires_every_tick_below_threshold() {
    let mut engine = engine_with_batteries(&[15.0]);
    for _ in 0..3 {
        engine.advance();
    }
    let alerts = engine.alerts();
    assert_eq!(alerts.len(), 3);
    let ticks: Vec<u64> = alerts.iter().map(|a| a.tick).collect();
    assert_eq!(ticks, vec![1, 2, 3]);
}

#[test]
fn test_alert_buffer_holds_five_most_recent() {
    let mut engine = engine_with_batteries(&[10.0, 12.0]);
    for _ in 0..4 {
        engine.advance();
        assert!(engine.alerts().len() <= ALERT_CAPACITY);
    }
    // 8 alerts raised, 5 retained: ids 4..=8
    let alerts = engine.alerts();
    assert_eq!(engine.alert_manager().total_raised(), 8);
    let ids: Vec<u64> = alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![4, 5, 6, 7, 8]);
}

#[test]
fn test_alerts_follow_vehicle_order_within_tick() {
    let mut engine = engine_with_batteries(&[5.0, 60.0, 7.0]);
    engine.advance();
    let alerts = engine.alerts();
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].message.contains("Drone_0"));
    assert!(alerts[1].message.contains("Drone_2"));
    assert!(alerts[0].id < alerts[1].id);
}

// ---- Commands ----

#[test]
fn test_pause_freezes_state() {
    let mut engine = engine();
    engine.advance();
    engine.advance();
    let before = engine.snapshot();

    engine.pause();
    for _ in 0..5 {
        assert!(!engine.advance());
    }
    assert_eq!(engine.elapsed_ticks(), 2);
    let mut after = engine.snapshot();
    assert!(after.mission.paused);
    after.mission.paused = false;
    assert_eq!(after, before);
}

#[test]
fn test_resume_continues_ticking() {
    let mut engine = engine();
    engine.pause();
    engine.advance();
    engine.resume();
    assert!(engine.advance());
    assert_eq!(engine.elapsed_ticks(), 1);
}

#[test]
fn test_stop_is_terminal() {
    let mut engine = engine();
    for _ in 0..4 {
        engine.advance();
    }
    engine.stop();
    let mission = engine.mission();
    assert_eq!(mission.status, MissionStatus::Complete);
    assert!(mission.paused);

    engine.resume();
    engine.apply(SwarmCommand::TogglePause);
    for _ in 0..10 {
        assert!(!engine.advance());
    }
    let mission = engine.mission();
    assert_eq!(mission.status, MissionStatus::Complete);
    assert!(mission.paused);
    assert_eq!(mission.elapsed_ticks(), 4);
}

#[test]
fn test_toggle_pause() {
    let mut engine = engine();
    engine.apply(SwarmCommand::TogglePause);
    assert!(engine.is_paused());
    engine.apply(SwarmCommand::TogglePause);
    assert!(!engine.is_paused());
}

#[test]
fn test_queued_commands_apply_at_tick_boundary() {
    let mut engine = engine();
    engine.queue_command(SwarmCommand::Pause);
    assert!(!engine.is_paused());
    assert!(!engine.advance());
    assert!(engine.is_paused());
    assert_eq!(engine.elapsed_ticks(), 0);

    engine.queue_commands([SwarmCommand::Resume, SwarmCommand::Stop]);
    assert!(!engine.advance());
    assert_eq!(engine.mission().status, MissionStatus::Complete);
}

// ---- Metrics & snapshot ----

#[test]
fn test_mission_progress_reaches_100() {
    let mut engine = engine();
    for i in 1..=320u64 {
        engine.advance();
        let progress = engine.metrics().mission_progress;
        if i >= 300 {
            assert_eq!(progress, 100.0);
        } else {
            let expected = i as f64 / 300.0 * 100.0;
            assert!((progress - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_snapshot_contents() {
    let mut engine = engine();
    for _ in 0..125 {
        engine.advance();
    }
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.mission.elapsed_ticks, 125);
    assert_eq!(snapshot.mission.clock_label, "2m 5s");
    assert_eq!(snapshot.vehicles.len(), 3);
    assert_eq!(snapshot.vehicles[1].id, "Drone_1");
    assert_eq!(snapshot.vehicles[1].history.len(), HISTORY_CAPACITY);
    assert_eq!(snapshot.metrics, engine.metrics());
    assert_eq!(snapshot.alerts, engine.alerts());
    assert_eq!(engine.mission_view(), snapshot.mission);
}

#[test]
fn test_metrics_track_battery_average() {
    let mut engine = engine();
    engine.advance();
    let avg = engine.metrics().average_battery;
    assert!((avg - (99.9 + 94.9 + 86.9) / 3.0).abs() < 1e-9);
}

#[test]
fn test_vehicle_lookup() {
    let engine = engine();
    assert_eq!(
        engine.vehicle("Drone_2").map(|v| v.position()),
        Some(Position::new(-5.0, 8.0, 10.0))
    );
    assert!(engine.vehicle("Drone_9").is_none());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SwarmState::new(SwarmConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SwarmState::new(SwarmConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();

    for _ in 0..300 {
        engine_a.advance();
        engine_b.advance();
        let json_a = serde_json::to_string(&engine_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&engine_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SwarmState::new(SwarmConfig {
        seed: 111,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SwarmState::new(SwarmConfig {
        seed: 222,
        ..Default::default()
    })
    .unwrap();

    engine_a.advance();
    engine_b.advance();
    assert_ne!(
        engine_a.vehicles()[0].position(),
        engine_b.vehicles()[0].position()
    );
}

#[test]
fn test_injected_chacha_matches_seeded_constructor() {
    let mut seeded = SwarmState::new(SwarmConfig {
        seed: 9,
        ..Default::default()
    })
    .unwrap();
    let mut injected =
        SwarmState::with_rng(SwarmConfig::default(), ChaCha8Rng::seed_from_u64(9)).unwrap();

    for _ in 0..20 {
        seeded.advance();
        injected.advance();
    }
    assert_eq!(seeded.snapshot(), injected.snapshot());
}

#[test]
fn test_engine_accepts_any_generator() {
    let rng_a = StepRng::new(0, 1 << 40);
    let rng_b = StepRng::new(0, 1 << 40);
    let mut engine_a = SwarmState::with_rng(SwarmConfig::default(), rng_a).unwrap();
    let mut engine_b = SwarmState::with_rng(SwarmConfig::default(), rng_b).unwrap();

    let before: Vec<Position> = engine_a.vehicles().iter().map(|v| v.position()).collect();
    assert!(engine_a.advance());
    engine_b.advance();

    assert_eq!(engine_a.snapshot(), engine_b.snapshot());
    assert_eq!(engine_a.elapsed_ticks(), 1);
    for (vehicle, prev) in engine_a.vehicles().iter().zip(before) {
        let now = vehicle.position();
        assert!((now.x - prev.x).abs() <= 1.0);
        assert!((now.y - prev.y).abs() <= 1.0);
        assert!((now.z - prev.z).abs() <= 0.5);
        assert_eq!(vehicle.history().len(), 1);
    }
    let expected = [99.9, 94.9, 86.9];
    for (vehicle, want) in engine_a.vehicles().iter().zip(expected) {
        assert!((vehicle.battery_level() - want).abs() < 1e-9);
    }
}
