//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Emit a header row from the first record's keys, then one row per record.
//! - Escape every cell per RFC 4180.
//!
//! Invariants:
//! - Records missing a header key get an empty cell; keys absent from the
//!   first record are not written.
//! - An empty batch produces empty output (no header).

use anyhow::Result;
use splunk_query_client::NormalizedRecord;

use crate::formatters::Formatter;
use crate::formatters::common::{build_csv_header, build_csv_row};

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_records(&self, records: &[NormalizedRecord]) -> Result<String> {
        let Some(first) = records.first() else {
            return Ok(String::new());
        };

        let keys: Vec<&str> = first.keys().collect();
        let mut output = build_csv_header(&keys);
        for record in records {
            let values: Vec<String> = keys
                .iter()
                .map(|k| record.get(k).unwrap_or_default().to_string())
                .collect();
            output.push_str(&build_csv_row(&values));
        }
        Ok(output)
    }
}
