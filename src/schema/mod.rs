//! Record schema inferred from the seed file
//!
//! The seed file holds exactly one programmer record. Its keys become the
//! attribute set every later record is projected onto.

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::{Seed, SeedLoader};
pub use types::{AttributeSet, Record, ID_ATTRIBUTE};
