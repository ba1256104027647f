//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned a failure status other than 401.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server, when one was given.
        message: String,
    },

    /// Server rejected the attached credential (HTTP 401). The cached
    /// session has already been torn down by the pipeline.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server reported a failure inside a successful response envelope.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// A successful envelope arrived without the expected payload.
    #[error("Response payload missing")]
    MissingPayload,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authorization failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Check if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
