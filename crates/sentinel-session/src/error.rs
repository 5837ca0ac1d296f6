//! Session storage error types.

use sentinel_core::SentinelError;
use thiserror::Error;

/// Durable credential-storage error.
///
/// Only surfaced on the write path (login). Read-path failures during
/// restore are treated as absent entries and degrade to logged-out.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<StoreError> for SentinelError {
    fn from(err: StoreError) -> Self {
        SentinelError::Storage(err.to_string())
    }
}
