//! Core phone controllers for phonebox.
//!
//! Each controller owns one slice of phone state and exposes the legal
//! transitions on it. Controllers never perform I/O and never talk to each
//! other: composition, navigation rules and host notifications live in the
//! application layer (`phonebox-app`).
//!
//! # Components
//!
//! - [`Router`]: the single active [`ScreenId`]
//! - [`AuthController`]: lock state and the PIN entry buffer
//! - [`CallController`]: the at-most-one [`CallSession`]
//! - [`NotificationQueue`]: newest-first notifications and the lock preview
//! - [`AppSession`]: foreground app, loaded content, recents
//! - [`PhoneState`]: host-owned device data
//! - [`TimerTable`]: generation-tagged periodic and one-shot timers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod apps;
pub mod auth;
pub mod call;
pub mod env;
pub mod error;
pub mod notifications;
pub mod phone;
pub mod screen;
pub mod status;
pub mod timer;

pub use apps::{AppInfo, AppSession};
pub use auth::{AuthController, DigitOutcome, UnlockOutcome, Verification};
pub use call::{CallController, CallSession, CallState, CallStatus};
pub use env::{Environment, WallTime};
pub use error::{CallError, UnknownScreen};
pub use notifications::{Notification, NotificationQueue, format_time};
pub use phone::PhoneState;
pub use screen::{Router, ScreenId};
pub use status::{BatteryLevel, StatusBar};
pub use timer::{TimerCommand, TimerConfig, TimerHandle, TimerKind, TimerTable};
