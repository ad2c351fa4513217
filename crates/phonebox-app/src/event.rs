//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from three sources:
//! - User interactions (keyboard, resize).
//! - Host pushes, translated by [`crate::Bridge`].
//! - Timer fires reported by the driver.
//!
//! Events that depend on wall time carry it, so the state machine never reads
//! a clock.

use phonebox_core::{TimerHandle, WallTime};
use phonebox_proto::{CallerData, NotificationPayload, PhoneDataPatch};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Host made the overlay visible.
    Shown,

    /// Host hid the overlay.
    Hidden,

    /// Host pushed phone data.
    PhoneDataUpdated(PhoneDataPatch),

    /// A call is ringing.
    CallReceived {
        /// Caller details.
        caller: CallerData,
        /// Arrival time.
        at: WallTime,
    },

    /// Host ended the current call.
    CallEnded,

    /// Host pushed a notification.
    NotificationAdded {
        /// Notification contents.
        notification: NotificationPayload,
        /// Arrival time.
        at: WallTime,
    },

    /// Host delivered content for an app.
    AppContentLoaded {
        /// App the content belongs to.
        app: String,
        /// Opaque content.
        content: String,
    },

    /// Host pushed a battery level.
    BatteryUpdated(f64),

    /// A timer fired.
    TimerFired {
        /// Handle the timer was started with.
        timer: TimerHandle,
        /// Time of the fire.
        now: WallTime,
    },
}
