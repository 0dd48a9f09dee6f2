//! Seed and schema error types
//!
//! Every error in this module is raised while booting. None of them can be
//! recovered from: the process reports the error and exits before binding.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while loading the seed record and inferring the attribute set
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Seed file does not exist
    #[error("Could not find database of programmers at {}", path.display())]
    SeedMissing { path: PathBuf },

    /// Seed file exists but could not be read
    #[error("Failed to read seed file {}: {source}", path.display())]
    SeedUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed content is not usable as a record template
    #[error("Malformed seed record ({origin}): {reason}")]
    SeedMalformed { origin: String, reason: String },
}

impl SchemaError {
    /// Build a malformed-seed error
    pub fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SeedMalformed {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::SeedMissing { .. } => "SEED_MISSING",
            SchemaError::SeedUnreadable { .. } => "SEED_UNREADABLE",
            SchemaError::SeedMalformed { .. } => "SEED_MALFORMED",
        }
    }
}
