//! Error types for the phone controllers.
//!
//! These errors never reach the user. The application layer logs them at
//! debug level and treats the offending input as a no-op.

use phonebox_proto::CallId;
use thiserror::Error;

use crate::call::CallState;

/// Errors from the call state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Transition not legal from the current state.
    #[error("invalid call transition: cannot {operation} from {state:?}")]
    InvalidState {
        /// State when the transition was attempted.
        state: CallState,
        /// Transition that was attempted.
        operation: &'static str,
    },

    /// A call arrived while another session exists.
    #[error("call {incoming} rejected: already handling call {current}")]
    Busy {
        /// Session that is already in progress.
        current: CallId,
        /// Call that was rejected.
        incoming: CallId,
    },
}

/// Screen name outside the fixed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_transition() {
        let err = CallError::InvalidState { state: CallState::Idle, operation: "answer" };
        assert_eq!(err.to_string(), "invalid call transition: cannot answer from Idle");

        let err = CallError::Busy { current: "a".into(), incoming: 9u64.into() };
        assert_eq!(err.to_string(), "call 9 rejected: already handling call a");
    }

    #[test]
    fn unknown_screen_names_the_input() {
        assert_eq!(UnknownScreen("settings".into()).to_string(), "unknown screen: settings");
    }
}
