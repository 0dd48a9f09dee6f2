//! # Programmers REST API
//!
//! List, fetch, update and create programmer records over HTTP. Request
//! bodies pass through the attribute whitelist before touching the store.

pub mod body;
pub mod errors;
pub mod filter;
pub mod handler;
pub mod server;

pub use errors::{ErrorEnvelope, RestError, RestResult};
pub use filter::OmittedFields;
pub use handler::{ProgrammerService, RestHandler};
pub use server::{routes, UPDATE_SUCCESS_MESSAGE};
