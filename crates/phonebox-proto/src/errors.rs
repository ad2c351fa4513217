//! Protocol error types.

use thiserror::Error;

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while decoding inbound host messages or encoding outbound
/// requests.
///
/// None of these are fatal to the phone. The runtime logs them and drops the
/// offending message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Bytes were not valid JSON, or a body failed to serialize.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The message is a JSON value without a string `action` field.
    #[error("message has no action tag")]
    MissingAction,

    /// The tag is known but its payload does not match the expected shape.
    #[error("invalid payload for {action}: {reason}")]
    InvalidPayload {
        /// Action tag of the rejected message.
        action: String,
        /// Decoder diagnostic.
        reason: String,
    },
}
