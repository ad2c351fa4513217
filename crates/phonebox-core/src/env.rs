//! Environment abstraction for deterministic testing.
//!
//! Decouples phone logic from the system clock. Production uses local wall
//! time; simulation uses a manually advanced clock so labels like "5m ago"
//! and call start times are reproducible.

use chrono::{DateTime, FixedOffset};

/// Wall-clock instant with the UTC offset it should be displayed in.
pub type WallTime = DateTime<FixedOffset>;

/// Abstract environment providing wall-clock time.
///
/// # Invariants
///
/// - `now()` never goes backwards within a single execution context
pub trait Environment: Clone + Send + Sync + 'static {
    /// Current wall-clock time.
    fn now(&self) -> WallTime;
}
