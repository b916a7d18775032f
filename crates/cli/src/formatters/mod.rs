//! Output formatters for search results.
//!
//! Responsibilities:
//! - Provide the output formats: JSON, CSV and a console table.
//! - Render a batch of `NormalizedRecord`s into one string.
//!
//! Does NOT handle:
//! - Writing to stdout or files (see `common::output_result`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Rationale |
//! |--------|---------------------|-----------|
//! | JSON | `[]` | Machine parseable - valid JSON |
//! | CSV | empty output | No first record to take a header from |
//! | Console | `No results found.` | Interactive format needs human feedback |

pub mod common;
mod csv;
mod json;
mod table;

use anyhow::Result;
use clap::ValueEnum;
use splunk_query_client::NormalizedRecord;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Console,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format one batch of search results.
    fn format_records(&self, records: &[NormalizedRecord]) -> Result<String>;
}

/// Get a formatter for the given format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Console => Box::new(TableFormatter),
    }
}
