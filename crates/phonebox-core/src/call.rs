//! Voice call state machine.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐ receive() ┌──────────┐ answer() ┌────────┐
//! │ Idle │──────────>│ Incoming │─────────>│ Active │
//! └──────┘           └──────────┘          └────────┘
//!    ↑                  │ decline()/end()      │ end()
//!    └──────────────────┴──────────────────────┘
//! ```
//!
//! At most one [`CallSession`] exists. Every other transition returns
//! [`CallError`] and leaves the state untouched. The duration counter only
//! advances while Active; the timer that drives it is owned by the caller.

use phonebox_proto::{CallId, CallerData};

use crate::{env::WallTime, error::CallError};

/// Observable call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// No session.
    Idle,
    /// Ringing, not yet answered.
    Incoming,
    /// Answered and in progress.
    Active,
}

/// Status of an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    /// Ringing.
    Incoming,
    /// In progress.
    Active,
}

/// The current call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSession {
    /// Host call id.
    pub id: CallId,
    /// Caller display name.
    pub name: Option<String>,
    /// Caller number.
    pub number: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// When the call started ringing.
    pub started_at: WallTime,
    /// Ringing or in progress.
    pub status: CallStatus,
    /// Seconds counted since the call was answered.
    pub elapsed_secs: u64,
}

impl CallSession {
    /// Name to display, falling back to "Unknown".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Unknown")
    }

    /// Elapsed time as `mm:ss`.
    pub fn duration_label(&self) -> String {
        format_duration(self.elapsed_secs)
    }
}

/// Owner of the at-most-one call session.
#[derive(Debug, Clone, Default)]
pub struct CallController {
    session: Option<CallSession>,
}

impl CallController {
    /// Create a controller with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CallState {
        match self.session.as_ref().map(|s| s.status) {
            None => CallState::Idle,
            Some(CallStatus::Incoming) => CallState::Incoming,
            Some(CallStatus::Active) => CallState::Active,
        }
    }

    /// Current session, if any.
    pub fn session(&self) -> Option<&CallSession> {
        self.session.as_ref()
    }

    /// Start ringing for a new call.
    ///
    /// # Errors
    ///
    /// - `CallError::Busy` if a session already exists
    pub fn receive(&mut self, caller: CallerData, now: WallTime) -> Result<(), CallError> {
        if let Some(current) = &self.session {
            return Err(CallError::Busy { current: current.id.clone(), incoming: caller.id });
        }

        self.session = Some(CallSession {
            id: caller.id,
            name: caller.name,
            number: caller.number,
            avatar: caller.avatar,
            started_at: now,
            status: CallStatus::Incoming,
            elapsed_secs: 0,
        });
        Ok(())
    }

    /// Answer the ringing call. Returns its id.
    ///
    /// # Errors
    ///
    /// - `CallError::InvalidState` unless Incoming
    pub fn answer(&mut self) -> Result<CallId, CallError> {
        match self.session.as_mut() {
            Some(session) if session.status == CallStatus::Incoming => {
                session.status = CallStatus::Active;
                session.elapsed_secs = 0;
                Ok(session.id.clone())
            },
            _ => Err(self.invalid("answer")),
        }
    }

    /// Decline the ringing call. Returns the destroyed session.
    ///
    /// # Errors
    ///
    /// - `CallError::InvalidState` unless Incoming
    pub fn decline(&mut self) -> Result<CallSession, CallError> {
        match self.session.take() {
            Some(session) if session.status == CallStatus::Incoming => Ok(session),
            other => {
                self.session = other;
                Err(self.invalid("decline"))
            },
        }
    }

    /// Hang up. Returns the destroyed session.
    ///
    /// # Errors
    ///
    /// - `CallError::InvalidState` if there is no session
    pub fn end(&mut self) -> Result<CallSession, CallError> {
        self.session.take().ok_or_else(|| self.invalid("end"))
    }

    /// Advance the duration counter by one second. Returns the new total.
    ///
    /// # Errors
    ///
    /// - `CallError::InvalidState` unless Active
    pub fn tick(&mut self) -> Result<u64, CallError> {
        match self.session.as_mut() {
            Some(session) if session.status == CallStatus::Active => {
                session.elapsed_secs += 1;
                Ok(session.elapsed_secs)
            },
            _ => Err(self.invalid("tick")),
        }
    }

    fn invalid(&self, operation: &'static str) -> CallError {
        CallError::InvalidState { state: self.state(), operation }
    }
}

/// Format seconds as zero-padded `mm:ss`. Minutes are not wrapped into hours.
pub fn format_duration(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
