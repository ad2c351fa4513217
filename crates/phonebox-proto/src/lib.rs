//! Host message protocol for phonebox.
//!
//! The phone talks to its host (the surrounding game client) over two
//! one-way channels:
//!
//! - Outbound: [`HostRequest`], one named action with a small JSON body,
//!   posted fire-and-forget. The host never answers on this channel.
//! - Inbound: [`HostMessage`], a JSON object discriminated by its `action`
//!   tag. The tag set is closed; unknown tags decode to `None` so newer hosts
//!   can talk to older phones.
//!
//! This crate only describes the wire format. It has no I/O and no notion of
//! phone state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod errors;
pub mod inbound;
pub mod outbound;
pub mod payloads;

pub use errors::{ProtocolError, Result};
pub use inbound::{HostMessage, decode};
pub use outbound::HostRequest;
pub use payloads::{CallId, CallerData, NotificationPayload, PhoneDataPatch, Setting};
