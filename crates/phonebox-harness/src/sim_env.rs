//! Manually advanced wall clock.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use chrono::{FixedOffset, TimeDelta, TimeZone};
use phonebox_core::{Environment, WallTime};

/// Simulation environment with a clock that only moves when told to.
///
/// Clones share the clock, so a test can keep one handle and advance time
/// while the runtime's bridge holds another.
#[derive(Clone)]
pub struct SimEnv {
    now: Arc<Mutex<WallTime>>,
}

impl Default for SimEnv {
    /// 2026-01-05 09:30:00 UTC, a Monday.
    fn default() -> Self {
        let start = FixedOffset::east_opt(0)
            .and_then(|utc| utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).single())
            .unwrap_or_default();
        Self::starting_at(start)
    }
}

impl SimEnv {
    /// Create a clock reading `start`.
    pub fn starting_at(start: WallTime) -> Self {
        Self { now: Arc::new(Mutex::new(start)) }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) -> WallTime {
        let delta = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = now.checked_add_signed(delta).unwrap_or(*now);
        *now
    }
}

impl Environment for SimEnv {
    fn now(&self) -> WallTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
