//! splunk-query - run one Splunk search from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and layer them over `.env` and environment config.
//! - Run the search via the shared client library and write the results.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Search orchestration or REST calls (see `crates/client`).
//!
//! Invariants:
//! - Precedence is CLI flag, then environment, then `.env`, then defaults.
//! - Logs and progress go to stderr; stdout carries only results.

mod args;
mod cancellation;
mod commands;
mod error;
mod formatters;
mod progress;
mod query;

use anyhow::{Context, Result};
use args::Cli;
use cancellation::{install_ctrl_c_handler, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use splunk_query_client::CancellationToken;
use splunk_query_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    install_ctrl_c_handler(&cancel);

    let exit_code = match run(&cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: &Cli, cancel: &CancellationToken) -> Result<()> {
    let config = load_config(cli)?;
    commands::search::run(cli, &config, cancel).await
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    cli.apply_overrides(loader)
        .build()
        .context("Failed to build configuration")
}
