//! Bonne Note: in-memory document manager.
//!
//! Command-line entry point: loads configuration, initializes logging, and
//! runs one command against a collection snapshot.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use bonnenote_core::config::AppConfig;
use bonnenote_core::config::logging::LoggingConfig;

mod commands;
mod output;
mod snapshot;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let env = std::env::var("BONNENOTE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load_from(&cli.config_dir, &env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    tracing::debug!("Starting Bonne Note v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.execute(&config) {
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Logs go to stderr so command output on
/// stdout stays machine-readable.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
