//! Failure conditions reported by the shortening core.

use thiserror::Error;

/// Errors surfaced by [`crate::application::services::ShortenerService`] and
/// [`crate::domain::repositories::UrlRepository`] implementations.
///
/// The HTTP layer maps these onto status codes in [`crate::error::AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The submitted URL is not a well-formed absolute URL.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record is stored under the requested code.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing store could not complete the operation.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}
