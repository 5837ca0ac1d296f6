//! Error types for the Sentinel console.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    /// A mutating operation was attempted without an authenticated
    /// session. Raised pre-flight; no network call has been issued.
    #[error("authentication required for {operation}")]
    AuthenticationRequired { operation: String },

    /// The login endpoint did not yield a usable token.
    #[error("authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// Network or server failure. Absorbed by fixture fallback on the
    /// read path; propagated to the caller on the write path.
    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("validation error: {message}")]
    Validation { message: String },

    /// Durable client storage could not be written.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type SentinelResult<T> = Result<T, SentinelError>;
