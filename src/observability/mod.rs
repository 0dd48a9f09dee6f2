//! Observability for the programmers API
//!
//! Structured logging via `tracing`; request spans come from the HTTP
//! server's trace layer.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
