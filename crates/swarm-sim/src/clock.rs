//! Tick clock.
//!
//! A pure scheduling primitive: the caller supplies `now` and the clock
//! reports how many tick boundaries have passed. While paused (or before
//! `start`) it never reports a tick, so nothing downstream can change.

use std::time::{Duration, Instant};

use swarm_core::error::ConfigError;

/// Beyond this many periods of lag the backlog is dropped.
const MAX_LAG_PERIODS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone)]
pub struct Clock {
    period: Duration,
    state: ClockState,
    next_tick: Option<Instant>,
}

impl Clock {
    /// Create an idle clock. The period must be positive.
    pub fn new(period_ms: i64) -> Result<Self, ConfigError> {
        if period_ms <= 0 {
            return Err(ConfigError::NonPositiveTickPeriod(period_ms));
        }
        Ok(Self {
            period: Duration::from_millis(period_ms.unsigned_abs()),
            state: ClockState::Idle,
            next_tick: None,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Begin ticking; the first tick is due one period after `now`.
    /// Has no effect unless the clock is idle.
    pub fn start(&mut self, now: Instant) {
        if self.state == ClockState::Idle {
            self.state = ClockState::Running;
            self.next_tick = Some(now + self.period);
        }
    }

    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
            self.next_tick = None;
        }
    }

    /// Continue ticking; the next tick is due a full period after `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
            self.next_tick = Some(now + self.period);
        }
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Count tick boundaries crossed up to `now` and schedule the next one.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_tick else {
            return 0;
        };
        if now < deadline {
            return 0;
        }

        if now - deadline > self.period * MAX_LAG_PERIODS {
            // Too far behind: one tick, then realign instead of bursting.
            self.next_tick = Some(now + self.period);
            return 1;
        }

        let mut ticks = 0;
        while deadline <= now {
            ticks += 1;
            deadline += self.period;
        }
        self.next_tick = Some(deadline);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_rejects_non_positive_period() {
        assert!(matches!(
            Clock::new(0),
            Err(ConfigError::NonPositiveTickPeriod(0))
        ));
        assert!(matches!(
            Clock::new(-250),
            Err(ConfigError::NonPositiveTickPeriod(-250))
        ));
    }

    #[test]
    fn test_idle_clock_never_ticks() {
        let mut clock = Clock::new(1000).unwrap();
        let t0 = Instant::now();
        assert_eq!(clock.state(), ClockState::Idle);
        assert_eq!(clock.poll(t0 + ms(5000)), 0);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn test_ticks_once_per_period() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.poll(t0 + ms(50)), 0);
        assert_eq!(clock.poll(t0 + ms(100)), 1);
        assert_eq!(clock.poll(t0 + ms(150)), 0);
        assert_eq!(clock.poll(t0 + ms(210)), 1);
        assert_eq!(clock.next_deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn test_small_lag_is_caught_up() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.start(t0);
        // Two boundaries (100, 200) crossed, within the lag allowance.
        assert_eq!(clock.poll(t0 + ms(250)), 2);
        assert_eq!(clock.next_deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn test_large_lag_resets_instead_of_bursting() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.start(t0);
        assert_eq!(clock.poll(t0 + ms(1000)), 1);
        assert_eq!(clock.next_deadline(), Some(t0 + ms(1100)));
    }

    #[test]
    fn test_paused_clock_emits_nothing() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.start(t0);
        clock.pause();
        assert!(!clock.is_running());
        assert_eq!(clock.poll(t0 + ms(500)), 0);
        assert_eq!(clock.poll(t0 + ms(5000)), 0);
    }

    #[test]
    fn test_resume_schedules_full_period() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.start(t0);
        clock.pause();
        clock.resume(t0 + ms(1000));
        assert!(clock.is_running());
        assert_eq!(clock.poll(t0 + ms(1050)), 0);
        assert_eq!(clock.poll(t0 + ms(1100)), 1);
    }

    #[test]
    fn test_start_and_resume_are_state_guarded() {
        let mut clock = Clock::new(100).unwrap();
        let t0 = Instant::now();
        clock.resume(t0);
        assert_eq!(clock.state(), ClockState::Idle);

        clock.start(t0);
        clock.start(t0 + ms(90));
        assert_eq!(clock.next_deadline(), Some(t0 + ms(100)));
    }
}
