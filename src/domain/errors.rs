//! Typed failure conditions raised by the core.
//!
//! The core returns these and never logs them; the HTTP layer decides what the
//! caller sees (see [`crate::error::AppError`]).

/// Failures of the short code generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Requested code length is zero. Programmer error, not retried.
    #[error("short code length must be positive, got {0}")]
    InvalidLength(usize),

    /// The OS random source failed. Never falls back to a weaker generator.
    #[error("secure random source unavailable: {0}")]
    RandomSourceFailure(String),
}

/// Failures of a [`crate::domain::repositories::UrlRepository`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with this short code already exists.
    #[error("short code '{0}' already exists")]
    DuplicateCode(String),

    /// No record matches the requested code or id.
    #[error("record not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}
