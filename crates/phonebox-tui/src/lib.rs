//! Terminal UI for Phonebox
//!
//! A thin shell over [`phonebox_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`phonebox_app::Runtime`].
//!
//! This crate handles terminal rendering, key translation, timers and the
//! wiring to the host transport.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod terminal;
pub mod ui;

pub use config::RuntimeConfig;
pub use phonebox_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError, convert_key};
