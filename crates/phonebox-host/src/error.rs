//! Transport error types.

use thiserror::Error;

/// Errors from the host transport.
///
/// Delivery failures of individual requests are logged, not returned. These
/// errors cover setup and the cases where the transport itself is unusable.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Invalid endpoint or client settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Socket I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body could not be encoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] phonebox_proto::ProtocolError),

    /// A host message exceeded the line limit.
    #[error("host message longer than {limit} bytes")]
    LineTooLong {
        /// Maximum accepted length.
        limit: usize,
    },

    /// No tokio runtime to spawn the request on.
    #[error("no async runtime available")]
    NoRuntime,
}
