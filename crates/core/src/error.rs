//! Domain error model.

use thiserror::Error;

/// Result type used across the session domain layer.
pub type SessionResult<T> = Result<T, SessionError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation/invariant failures.
/// Infrastructure concerns (storage, transport) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A value failed validation (e.g. empty credential string).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A session invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl SessionError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
