//! Remote-API error types and conversions.

use sentinel_core::SentinelError;
use thiserror::Error;

/// HTTP-layer error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("malformed payload: {0}")]
    Decode(String),
}

impl From<ApiError> for SentinelError {
    fn from(err: ApiError) -> Self {
        SentinelError::Upstream(err.to_string())
    }
}
