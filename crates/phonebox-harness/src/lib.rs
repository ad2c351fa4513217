//! Deterministic simulation harness for phonebox.
//!
//! Manual-clock [`Environment`](phonebox_core::Environment) and an in-memory
//! [`Driver`](phonebox_app::Driver) so the production
//! [`Runtime`](phonebox_app::Runtime) runs unchanged in tests, with virtual
//! timers that fire only when the test advances the clock.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the phone
//! invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    AppContainerHasApp, CallScreenMatchesCall, CallTimerArmedIffActive, Invariant,
    InvariantRegistry, InvariantResult, PhoneSnapshot, PinBufferBounded, PreviewIsPrefix,
    ScreenReachable, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_env::SimEnv;
