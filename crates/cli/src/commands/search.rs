//! Search command implementation.

use anyhow::Result;
use splunk_query_client::{CancellationToken, redact_query, search};
use splunk_query_config::Config;
use tracing::info;

use crate::args::Cli;
use crate::formatters::common::output_result;
use crate::formatters::{OutputFormat, get_formatter};
use crate::progress::Spinner;
use crate::query::resolve_query;

pub async fn run(cli: &Cli, config: &Config, cancel: &CancellationToken) -> Result<()> {
    let query = resolve_query(cli.query.as_deref(), cli.query_file.as_deref())?;
    info!("Executing search: {}", redact_query(query.trim()));

    let show_progress = !cli.quiet && cli.format != OutputFormat::Console;
    let spinner = Spinner::new(show_progress, "Searching");

    let records = search(&query, config, cancel).await?;
    spinner.finish(&format!("{} results", records.len()));

    let output = get_formatter(cli.format).format_records(&records)?;
    output_result(&output, cli.format, cli.file.as_deref())?;

    if cli.format == OutputFormat::Console && !records.is_empty() {
        eprintln!("\nDisplayed {} results.", records.len());
    }
    Ok(())
}
