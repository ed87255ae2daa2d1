//! URL shortening and resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{SaveOutcome, UrlRepository};
use crate::utils::code_generator::{derive_code, perturb};
use crate::utils::url_validator::validate_url;

/// Upper bound on candidate codes tried for a single `shorten` call.
pub const MAX_COLLISION_ATTEMPTS: usize = 10;

/// Service deriving short codes from URLs and resolving them back.
///
/// The first candidate for a URL is its content hash, so shortening the same
/// URL again finds the existing record instead of writing a new one. When the
/// candidate is held by a different URL, the hash input is perturbed with a
/// random nonce and a new candidate is tried.
pub struct ShortenerService<R: UrlRepository + ?Sized = dyn UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens `original`, returning the record that now represents it.
    ///
    /// # Collision Handling
    ///
    /// - Empty slot: the record is stored and returned
    /// - Slot holds the same URL: the existing record is returned, nothing is written
    /// - Slot holds another URL: the input is perturbed and the next candidate tried
    ///
    /// A URL that was stored under a perturbed code is not remembered as such;
    /// submitting it again starts over from its content hash.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if `original` is not a well-formed
    /// absolute URL.
    ///
    /// Returns [`DomainError::StorageFailure`] if the repository fails or no
    /// free code is found within [`MAX_COLLISION_ATTEMPTS`] candidates.
    pub async fn shorten(&self, original: &str) -> Result<UrlRecord, DomainError> {
        validate_url(original).map_err(|e| DomainError::InvalidInput(e.to_string()))?;

        let mut hash_input = original.to_string();

        for attempt in 1..=MAX_COLLISION_ATTEMPTS {
            let candidate = UrlRecord::new(derive_code(&hash_input), original);

            match self.repository.save_if_absent(candidate.clone()).await? {
                SaveOutcome::Inserted => {
                    debug!(code = %candidate.code, attempt, "Stored new short code");
                    return Ok(candidate);
                }
                SaveOutcome::Existing(existing) if existing.original == original => {
                    debug!(code = %existing.code, "URL already shortened");
                    return Ok(existing);
                }
                SaveOutcome::Existing(existing) => {
                    warn!(
                        code = %existing.code,
                        attempt,
                        "Short code collision, retrying with perturbed input"
                    );
                    hash_input = perturb(original);
                }
            }
        }

        Err(DomainError::StorageFailure(format!(
            "failed to allocate a unique code after {MAX_COLLISION_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no record is stored under `code`.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, DomainError> {
        self.repository.find_by_code(code).await
    }

    /// Number of records currently stored.
    pub async fn record_count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
