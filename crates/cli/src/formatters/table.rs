//! Console table formatter.
//!
//! Responsibilities:
//! - Render records as padded columns for a terminal.
//!
//! Invariants:
//! - Columns come from the first record's keys.
//! - Each column is at least `MIN_COLUMN_WIDTH` wide and fits its header and values.
//! - A blank line separates every `ROW_GROUP` rows, never after the last row.

use anyhow::Result;
use splunk_query_client::NormalizedRecord;

use crate::formatters::Formatter;

const MIN_COLUMN_WIDTH: usize = 8;
const ROW_GROUP: usize = 10;
const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

/// Console table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_records(&self, records: &[NormalizedRecord]) -> Result<String> {
        let Some(first) = records.first() else {
            return Ok("No results found.\n".to_string());
        };

        let fields: Vec<&str> = first.keys().collect();
        let widths: Vec<usize> = fields
            .iter()
            .map(|field| {
                records
                    .iter()
                    .map(|r| display_width(r.get(field).unwrap_or_default()))
                    .chain([display_width(field), MIN_COLUMN_WIDTH])
                    .max()
                    .unwrap_or(MIN_COLUMN_WIDTH)
            })
            .collect();

        let mut output = String::new();
        push_line(&mut output, fields.iter().copied(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join(RULE_SEPARATOR));
        output.push('\n');

        for (index, record) in records.iter().enumerate() {
            push_line(
                &mut output,
                fields.iter().map(|f| record.get(f).unwrap_or_default()),
                &widths,
            );
            if (index + 1) % ROW_GROUP == 0 && index + 1 < records.len() {
                output.push('\n');
            }
        }
        Ok(output)
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    output.push_str(&padded.join(COLUMN_SEPARATOR));
    output.push('\n');
}
