//! Error types for credential storage.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing to the primary channel.
///
/// Reads never fail: a channel that cannot produce a value reports absence
/// instead, logging the underlying cause.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying storage could not be written or deleted.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
