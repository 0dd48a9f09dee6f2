//! programmers-api - an in-memory HTTP record service for programmer profiles
//!
//! One seed record is loaded at startup; its keys fix the attribute set
//! every request body is projected onto. Records live only in memory.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod storage;
