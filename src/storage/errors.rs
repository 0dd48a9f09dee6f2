//! Record store error types

use thiserror::Error;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No record carries the requested identifier
    #[error("Not found for id of: {id}")]
    NotFound { id: String },

    /// A writer panicked while holding the collection lock
    #[error("Record store lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
