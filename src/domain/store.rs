//! Append-only in-memory store for registered users.
//!
//! The store lives for the process lifetime and is shared by all request
//! workers, so every access goes through a mutex. Records are never mutated
//! or deleted; creation order is preserved.

use std::sync::Mutex;

use thiserror::Error;

use crate::domain::user::UserRecord;

/// Failure modes for store access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A panicking writer left the store lock poisoned.
    #[error("user store lock poisoned")]
    Poisoned,
}

/// Port for the process-lifetime user store.
pub trait UserStore: Send + Sync {
    /// Append a record, keeping creation order.
    fn append(&self, record: UserRecord) -> Result<(), StoreError>;

    /// Snapshot of all records in creation order.
    fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
}

/// Mutex-guarded store shared across request workers.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn append(&self, record: UserRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .push(record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }
}
