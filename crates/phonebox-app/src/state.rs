//! Observable application state types.
//!
//! View-model types that exist only at the application layer. Controller
//! state (calls, notifications, apps) is exposed directly from
//! `phonebox-core`.

/// Slide-down panel shown over the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Full notification list.
    Notifications,
    /// Wifi, airplane and silent toggles.
    QuickSettings,
}

/// Visual feedback that clears itself on a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulses {
    /// Wrong PIN entered.
    pub pin_error: bool,
    /// Sequence number of the notification shown as a popup.
    pub popup: Option<u64>,
}
