//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the phone at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use phonebox_app::App;
use phonebox_core::{CallState, ScreenId, TimerKind};
use serde::Serialize;

/// Snapshot of the phone's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneSnapshot {
    /// Active screen name.
    pub screen: &'static str,
    /// Lock state.
    pub locked: bool,
    /// Foreground app, if any.
    pub current_app: Option<String>,
    /// Whether content is loaded for the foreground app.
    pub has_content: bool,
    /// Contents of the PIN buffer.
    pub pin_entered: String,
    /// Call state name.
    pub call_state: &'static str,
    /// Whether the call duration timer is armed.
    pub call_timer_armed: bool,
    /// Notification sequence numbers, newest first.
    pub notifications: Vec<u64>,
    /// Sequence numbers shown on the lock screen preview.
    pub preview: Vec<u64>,
    /// Recently opened apps, most recent first.
    pub recents: Vec<String>,
}

impl PhoneSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        let session = app.app_session();
        Self {
            screen: app.screen().as_str(),
            locked: app.is_locked(),
            current_app: session.current().map(str::to_owned),
            has_content: session.content().is_some(),
            pin_entered: app.auth().entered().to_owned(),
            call_state: call_state_name(app.calls().state()),
            call_timer_armed: app.timers().is_armed(TimerKind::CallDuration),
            notifications: app.notifications().iter().map(|n| n.seq).collect(),
            preview: app.notifications().preview().map(|n| n.seq).collect(),
            recents: session.recents().map(str::to_owned).collect(),
        }
    }

    /// Active screen.
    pub fn screen_id(&self) -> Option<ScreenId> {
        self.screen.parse().ok()
    }
}

fn call_state_name(state: CallState) -> &'static str {
    match state {
        CallState::Idle => "idle",
        CallState::Incoming => "incoming",
        CallState::Active => "active",
    }
}
