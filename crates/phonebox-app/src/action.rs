//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use phonebox_core::TimerCommand;
use phonebox_proto::HostRequest;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Notify the host. Fire-and-forget.
    Host(HostRequest),

    /// Start or cancel a timer.
    Timer(TimerCommand),
}
