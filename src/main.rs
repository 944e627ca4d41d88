use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use strategy_pyramid::cli::{execute_command, Cli};
use strategy_pyramid::config::{Config, LogFormat, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    init_logging(&config.logging);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        default_session = config.api.default_session.as_deref().unwrap_or("-"),
        "Running command"
    );

    // Reports go to stdout; logs and failures go to stderr.
    let outcome = execute_command(cli.command, &config).await;
    if outcome.exit_code != 0 {
        warn!(exit_code = outcome.exit_code, "Command failed");
        eprintln!("{}", outcome.message);
        std::process::exit(outcome.exit_code);
    }
    println!("{}", outcome.message);
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides `LOG_LEVEL`.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}
