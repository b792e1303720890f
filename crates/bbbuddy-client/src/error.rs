//! Client error types.

use thiserror::Error;

use bbbuddy_protocol::ProtocolError;

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by [`crate::ApiClient`] operations.
///
/// There is no retry or recovery anywhere in the client; every failure
/// propagates to the caller as one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The bridge answered with an HTTP status other than 200. Carries the
    /// raw response body, which is not expected to be an envelope.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The request never completed (connect failure, timeout, read error).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a valid envelope, or a typed payload was
    /// missing expected fields.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The bridge answered 200 with a distinguished failure event, carrying
    /// a server-supplied message in `data.error`.
    #[error("remote failure '{event}': {message}")]
    Remote { event: String, message: String },

    /// Invalid or missing configuration (empty credentials, malformed
    /// endpoint URL, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the HTTP status code for transport errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the server-supplied message for remote failures.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}
