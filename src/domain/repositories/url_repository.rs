//! Repository trait for short code storage.

use crate::domain::entities::UrlRecord;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// Result of [`UrlRepository::save_if_absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The slot was empty and now holds the submitted record.
    Inserted,
    /// The slot was already taken; nothing was written.
    Existing(UrlRecord),
}

/// Storage capability for URL records keyed by short code.
///
/// Implementations must be safe to call from many tasks at once.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `record` under its code, replacing whatever occupied the slot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::StorageFailure`] if the backend is unusable.
    async fn save(&self, record: UrlRecord) -> Result<(), DomainError>;

    /// Stores `record` only if its code is not taken yet.
    ///
    /// The check and the insert happen as one atomic step, so two callers
    /// racing for the same empty slot see exactly one `Inserted`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::StorageFailure`] if the backend is unusable.
    async fn save_if_absent(&self, record: UrlRecord) -> Result<SaveOutcome, DomainError>;

    /// Finds the record stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if the slot is empty.
    /// Returns [`DomainError::StorageFailure`] if the backend is unusable.
    async fn find_by_code(&self, code: &str) -> Result<UrlRecord, DomainError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::StorageFailure`] if the backend is unusable.
    async fn count(&self) -> Result<usize, DomainError>;
}
