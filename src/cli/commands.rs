//! CLI command implementations
//!
//! Boot order for `serve`: configuration, logging, seed record, routes,
//! listener. A seed failure aborts before anything is bound.

use std::io::Write;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::rest_api::{routes, ProgrammerService};
use crate::schema::SeedLoader;
use crate::storage::SequentialGenerator;

use super::args::{Cli, Command};
use super::config::{Config, IdStrategy};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, seed, port } => {
            let config = Config::load_or_default(config.as_deref())?.with_overrides(seed, port);
            serve(config)
        }
        Command::Schema { config, seed } => {
            let config = Config::load_or_default(config.as_deref())?.with_overrides(seed, None);
            schema(&config, &mut std::io::stdout())
        }
    }
}

/// Build the handler described by `config`, loading its seed record
pub fn build_service(config: &Config) -> CliResult<ProgrammerService> {
    let loader = SeedLoader::new(&config.seed_path);
    let seed = loader.load()?;

    tracing::info!(
        seed = %loader.path().display(),
        attributes = seed.attributes.len(),
        "seed record loaded"
    );

    let service = ProgrammerService::from_seed(seed).with_omitted_fields(config.omitted_fields);
    Ok(match config.id_strategy {
        IdStrategy::Uuid => service,
        IdStrategy::Sequential => service.with_id_generator(SequentialGenerator::default()),
    })
}

/// Build the full HTTP server for `config`
pub fn build_server(config: &Config) -> CliResult<HttpServer> {
    let service = build_service(config)?;
    Ok(HttpServer::with_config(
        config.server.clone(),
        routes(Arc::new(service)),
    ))
}

/// Boot the service and serve until shutdown
pub fn serve(config: Config) -> CliResult<()> {
    init_logging(config.log_format);

    let server = match build_server(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(code = e.code_str(), error = %e, "startup aborted");
            return Err(e);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Print the inferred attribute set, one name per line
pub fn schema<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let seed = SeedLoader::new(&config.seed_path).load()?;
    for name in seed.attributes.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
