//! programmers-api entry point
//!
//! Parses arguments and hands off to the CLI module. Any error, including a
//! missing seed file, is printed to stderr and exits with status 1.

use programmers_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code_str(), e);
        std::process::exit(1);
    }
}
