//! Record store
//!
//! Holds the programmer records for the lifetime of the process. Nothing is
//! written back to disk; a restart resets the collection to the seed record.

mod errors;
mod ids;
mod memory;

pub use errors::{StorageError, StorageResult};
pub use ids::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use memory::{id_matches, RecordStore};
