//! CLI module for the programmers API
//!
//! Provides command-line interface for:
//! - serve: load the seed record and serve HTTP
//! - schema: print the inferred attribute set

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_server, build_service, run, run_command, schema, serve};
pub use config::{Config, IdStrategy};
pub use errors::{CliError, CliResult};
