//! pagekit CLI
//!
//! Command-line interface for cursor tokens and page arithmetic

use clap::Parser;
use pagekit::cli::{Cli, Runner};
use pagekit::config::{Config, LogConfig};
use pagekit::meta::ErrorBody;
use pagekit::types::{LogFormat, LogLevel};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    init_tracing(&config.log, cli.verbose);

    let runner = Runner::new(cli, &config);
    if let Err(e) = runner.run() {
        match e.as_pagination() {
            Some(err) => {
                let body = ErrorBody::from(err);
                eprintln!(
                    "{}",
                    serde_json::to_string(&body).unwrap_or_else(|_| err.to_string())
                );
            }
            None => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over the config level.
fn init_tracing(log: &LogConfig, verbose: bool) {
    let level = if verbose { LogLevel::Debug } else { log.level };
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::from(level).into())
        .from_env_lossy();

    match log.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
