//! Production Environment implementation using the local wall clock.

use chrono::Local;
use phonebox_core::{Environment, WallTime};

/// Production environment reading the system clock in the local time zone.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> WallTime {
        Local::now().fixed_offset()
    }
}
