//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::DomainError;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{SaveOutcome, UrlRepository};

/// Process-local URL store backed by a `HashMap` behind a readers-writer lock.
///
/// Lookups share the read lock; writes take the write lock. Each lock is held
/// for a single map operation and never across an `.await`. Contents are lost
/// when the process exits and the map grows without bound.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, UrlRecord>>, DomainError> {
        self.records
            .read()
            .map_err(|_| DomainError::StorageFailure("url store lock is poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, UrlRecord>>, DomainError> {
        self.records
            .write()
            .map_err(|_| DomainError::StorageFailure("url store lock is poisoned".to_string()))
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, record: UrlRecord) -> Result<(), DomainError> {
        self.write()?.insert(record.code.clone(), record);
        Ok(())
    }

    async fn save_if_absent(&self, record: UrlRecord) -> Result<SaveOutcome, DomainError> {
        let mut records = self.write()?;

        match records.entry(record.code.clone()) {
            Entry::Occupied(existing) => Ok(SaveOutcome::Existing(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(SaveOutcome::Inserted)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<UrlRecord, DomainError> {
        self.read()?
            .get(code)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("url with code {code} not found")))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }
}
