//! JSON formatter implementation.
//!
//! Records serialize as objects whose keys keep result order.

use anyhow::Result;
use splunk_query_client::NormalizedRecord;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_records(&self, records: &[NormalizedRecord]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(records)?;
        output.push('\n');
        Ok(output)
    }
}
