//! # HTTP Server Module
//!
//! Binds the REST routes to a TCP listener with CORS and request tracing
//! middleware.

pub mod config;
pub mod server;

pub use config::{CorsPolicy, HttpServerConfig};
pub use server::HttpServer;
