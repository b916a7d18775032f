//! Results normalization.
//!
//! Two stages:
//! - [`derive_table`] finds the results array in whatever shape Splunk sent
//!   and lays it out as a field list plus rows.
//! - [`to_records`] reduces a table to flat string records for output.
//!
//! A non-empty raw results array takes priority in the second stage, so
//! object-shaped results keep every key instead of going through the
//! positional (and lossy) row projection.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{NormalizedRecord, ResultTable, Row};

/// Keys checked, in order, for the results array.
const RESULT_KEYS: [&str; 3] = ["results", "result", "entry"];

/// Derive a [`ResultTable`] from a raw results body.
///
/// An empty or malformed body yields an empty table.
pub fn derive_table(body: &str) -> ResultTable {
    if body.trim().is_empty() {
        return ResultTable::default();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => derive_table_from_value(&value),
        Err(e) => {
            debug!(body_len = body.len(), error = %e, "Results body is not JSON");
            ResultTable::default()
        }
    }
}

/// [`derive_table`] over an already parsed body.
pub fn derive_table_from_value(body: &Value) -> ResultTable {
    let results = results_array(body);
    let fields = match body.get("fields") {
        Some(explicit) if !explicit.is_null() => field_names(explicit),
        _ => results
            .and_then(|r| r.first())
            .map(fields_from_first)
            .unwrap_or_default(),
    };

    match results {
        Some(results) => ResultTable {
            rows: results.iter().map(|r| row_from_result(r, &fields)).collect(),
            fields,
            raw_results: Some(results.clone()),
        },
        None => ResultTable {
            fields,
            rows: Vec::new(),
            raw_results: None,
        },
    }
}

fn results_array(body: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(items) = body {
        return Some(items);
    }
    RESULT_KEYS
        .iter()
        .find_map(|key| body.get(key).filter(|v| !v.is_null()))
        .and_then(Value::as_array)
}

/// Field names from an explicit `fields` list of strings or `{name}` objects.
///
/// An entry without a usable name is named by its position, so later fields
/// stay aligned with positional rows.
fn field_names(fields: &Value) -> Vec<String> {
    let Some(items) = fields.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .map(|(i, f)| match f {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj
                .get("name")
                .and_then(Value::as_str)
                .map_or_else(|| i.to_string(), str::to_string),
            Value::Null => i.to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn fields_from_first(first: &Value) -> Vec<String> {
    match first {
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        Value::Object(obj) => obj.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Maps are projected onto `fields`; with no fields they stay keyed.
fn row_from_result(result: &Value, fields: &[String]) -> Row {
    match result {
        Value::Array(items) => Row::Values(items.clone()),
        Value::Object(obj) if fields.is_empty() => Row::Record(obj.clone()),
        Value::Object(obj) => Row::Values(
            fields
                .iter()
                .map(|f| obj.get(f).cloned().unwrap_or(Value::Null))
                .collect(),
        ),
        scalar => Row::Scalar(scalar.clone()),
    }
}

/// Reduce a table to flat records, one per result.
pub fn to_records(table: &ResultTable) -> Vec<NormalizedRecord> {
    if let Some(raw) = table.raw_results.as_ref().filter(|r| !r.is_empty()) {
        return raw.iter().map(record_from_raw).collect();
    }
    if table.fields.is_empty() {
        table.rows.iter().map(record_without_fields).collect()
    } else {
        table
            .rows
            .iter()
            .map(|row| record_with_fields(row, &table.fields))
            .collect()
    }
}

fn record_from_raw(value: &Value) -> NormalizedRecord {
    match value {
        Value::Object(obj) => stringify_object(obj),
        Value::Array(items) => NormalizedRecord::raw(join(items, ",")),
        other => NormalizedRecord::raw(scalar_text(other)),
    }
}

fn stringify_object(obj: &Map<String, Value>) -> NormalizedRecord {
    obj.iter().map(|(k, v)| (k.clone(), stringify(v))).collect()
}

fn record_without_fields(row: &Row) -> NormalizedRecord {
    match row {
        Row::Values(values) => NormalizedRecord::raw(join(values, " ")),
        Row::Record(obj) => stringify_object(obj),
        Row::Scalar(value) => NormalizedRecord::raw(scalar_text(value)),
    }
}

fn record_with_fields(row: &Row, fields: &[String]) -> NormalizedRecord {
    match row {
        Row::Values(values) => fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.clone(), flat_cell(values.get(i))))
            .collect(),
        Row::Record(obj) => fields
            .iter()
            .map(|f| (f.clone(), flat_cell(obj.get(f))))
            .collect(),
        Row::Scalar(value) => fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.clone(), flat_cell((i == 0).then_some(value))))
            .collect(),
    }
}

/// Stringify any value: null is empty, arrays are comma-joined, objects are JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Array(items) => join(items, ","),
        Value::Object(_) => value.to_string(),
        other => scalar_text(other),
    }
}

/// Cell for a positional row: null, missing and nested values become empty.
fn flat_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null | Value::Array(_) | Value::Object(_)) => String::new(),
        Some(other) => scalar_text(other),
    }
}

fn join(values: &[Value], separator: &str) -> String {
    values
        .iter()
        .map(stringify)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Text of a scalar without JSON quoting.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
