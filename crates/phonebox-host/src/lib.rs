//! Production host transport for phonebox.
//!
//! The host is the process that owns the phone overlay. It receives
//! fire-and-forget HTTP requests (`phone:*` actions) and pushes tagged JSON
//! messages back.
//!
//! # Components
//!
//! - [`HttpHost`]: POSTs [`HostRequest`](phonebox_proto::HostRequest)s
//! - [`HostListener`]: accepts line-delimited JSON pushes over TCP
//! - [`SystemEnv`]: local wall clock

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod http;
mod listener;
mod system_env;

pub use error::TransportError;
pub use http::{DEFAULT_ENDPOINT, DEFAULT_RESOURCE, HttpHost, HttpHostConfig};
pub use listener::{HostListener, MAX_LINE_LEN};
pub use system_env::SystemEnv;
