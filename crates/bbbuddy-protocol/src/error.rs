//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while encoding or decoding envelopes.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize or parse an envelope.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The envelope decoded, but its `data` does not have the shape the
    /// event requires (missing fields, wrong types).
    #[error("malformed '{event}' payload: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}
