//! Common utilities for formatters.
//!
//! Responsibilities:
//! - String escaping for CSV.
//! - Atomic file writing.
//! - Routing formatted output to stdout or a file.
//!
//! Does NOT handle:
//! - Format-specific logic (lives in respective formatter modules).

use anyhow::{Context, Result};
use std::path::Path;

use crate::formatters::OutputFormat;

/// Escape a string value for CSV output according to RFC 4180.
///
/// Rules:
/// - Wrap in double quotes if the field contains comma, double quote, or newline
/// - Double any embedded double quotes
pub fn escape_csv(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');
    if !needs_quoting {
        return s.to_string();
    }
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Build a CSV header row from field names.
pub fn build_csv_header(fields: &[&str]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
    format!("{}\n", escaped.join(","))
}

/// Build a CSV data row from field values.
pub fn build_csv_row(values: &[String]) -> String {
    let escaped: Vec<String> = values.iter().map(|v| escape_csv(v)).collect();
    format!("{}\n", escaped.join(","))
}

/// Write output to `output_file`, or to stdout when none is given.
///
/// ```rust,ignore
/// let formatter = get_formatter(format);
/// let output = formatter.format_records(&records)?;
/// output_result(&output, format, output_file.as_deref())?;
/// ```
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // No parent (e.g. "results.json") means the current directory.
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
