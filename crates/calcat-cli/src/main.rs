//! calcat CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use calcat_core::{TracingConfig, init_tracing};
use calcat_sources::{DefaultReader, Location};

use calcat_cli::cli::Cli;
use calcat_cli::config::CliConfig;
use calcat_cli::error::{CliError, CliResult};
use calcat_cli::pipeline::{Pipeline, PipelineOptions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };

    let mut tracing_config = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Some(ref filter) = config.log_filter {
        tracing_config = tracing_config.with_env_filter(filter);
    }
    init_tracing(tracing_config.with_format(config.log_format.into()))?;

    // Flags win over the file
    if let Some(secs) = cli.timeout {
        config.fetch.timeout_secs = secs;
    }
    if let Some(concurrency) = cli.concurrency {
        config.fetch.concurrency = concurrency;
    }
    config.opaque.keep_fields.extend(cli.keep_fields.iter().cloned());

    let reader_config = config.reader_config();
    debug!(
        timeout_secs = config.fetch.timeout_secs,
        concurrency = config.fetch.concurrency,
        sources = cli.sources.len(),
        "Starting"
    );

    let reader = DefaultReader::new(&reader_config)?;
    let options = PipelineOptions::default()
        .with_opaque(cli.opaque)
        .with_mode(cli.output_mode())
        .with_whitelist(config.whitelist())
        .with_concurrency(config.fetch.concurrency);

    let locations: Vec<Location> = cli.sources.iter().map(Location::parse).collect();
    Pipeline::new(reader, options)
        .run(&locations, &mut std::io::stdout())
        .await
}
