//! CLI argument definitions using clap
//!
//! Commands:
//! - programmers-api serve [--config <path>] [--seed <path>] [--port <n>]
//! - programmers-api schema [--config <path>] [--seed <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Programmers API - an in-memory programmer record service
#[derive(Parser, Debug)]
#[command(name = "programmers-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the seed record and serve the HTTP API
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed record file, overrides the configuration
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Listening port, overrides the configuration
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the attribute set inferred from the seed record and exit
    Schema {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed record file, overrides the configuration
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
