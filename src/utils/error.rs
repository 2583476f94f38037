//! Error handling module
//!
//! Defines the error types surfaced by the client

use thiserror::Error;

/// Client error types
///
/// Every failure propagates directly to the caller; nothing is retried or
/// recovered internally.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No API key is configured; raised before any network activity
    #[error("Authentication failed: no API key is configured")]
    MissingApiKey,

    /// Network-level failure (DNS, connection reset, timeout), surfaced
    /// as-is from the transport
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider returned a non-2xx response
    #[error("API request failed with status {status}: {detail} (request: {request_body})")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// The JSON body that was sent, verbatim, for reproducibility
        request_body: String,
        /// Parsed error envelope text, or the raw body when the envelope
        /// itself does not parse
        detail: String,
    },

    /// A request body that could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Serialization(serde_json::Error),

    /// A 2xx response whose body does not match the expected result shape
    #[error("Failed to decode response body: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Local I/O failure, e.g. an audio file that could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Numeric status code for provider errors, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was raised before any request was sent
    pub fn is_pre_network(&self) -> bool {
        matches!(self, ClientError::MissingApiKey)
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;
