//! The I/O boundary of the phone.
//!
//! A [`Driver`] supplies input (keys, host pushes, timer fires) and carries
//! out side effects (host requests, timers, drawing). The generic
//! [`crate::Runtime`] does everything else, so the terminal and the
//! simulation share one event loop and differ only in their driver.

use std::future::Future;

use phonebox_core::{TimerCommand, TimerHandle};
use phonebox_proto::HostRequest;

use crate::{App, AppEvent};

/// Inputs a driver can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// Local input (keyboard, resize).
    Input(AppEvent),
    /// Raw message pushed by the host.
    Host(Vec<u8>),
    /// A scheduled timer fired.
    Timer(TimerHandle),
}

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production TUI and simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, reqwest for host requests, a TCP
///   listener for host pushes, tokio tasks for timers
/// - **Simulation**: injected events, captured requests, virtual timers
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input.
    ///
    /// Returns `None` if nothing is ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<DriverEvent>, Self::Error>> + Send;

    /// Deliver a request to the host.
    ///
    /// Fire-and-forget: must not wait for the host, and delivery failures are
    /// logged by the implementation rather than returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the driver itself is unusable.
    fn send_request(&mut self, request: HostRequest) -> Result<(), Self::Error>;

    /// Start or cancel a timer.
    ///
    /// # Errors
    ///
    /// Returns an error only if the driver itself is unusable.
    fn schedule(&mut self, command: TimerCommand) -> Result<(), Self::Error>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop timers and release resources.
    fn stop(&mut self);
}
