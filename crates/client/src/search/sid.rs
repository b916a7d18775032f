//! Search job ID (SID) extraction.
//!
//! Splunk has returned the SID of a new job in several shapes across
//! versions and transports. Extraction is an ordered table of named
//! strategies; the first one that yields a non-empty SID wins:
//!
//! 1. `bare`: a body with no `{` or `<` is the SID itself.
//! 2. `json`: `sid`, `entry[0].name` or `entry[0].content.sid`.
//! 3. `markup`: `<sid>…</sid>`, else the `name="…"` attribute of an `<entry>` tag.
//! 4. `location`: the path after `/services/search/jobs/` in the `Location` header.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::debug;

use crate::error::SearchError;
use crate::models::{SubmissionBody, SubmitResponse};

type Strategy = fn(&SubmitResponse) -> Option<String>;

const STRATEGIES: [(&str, Strategy); 4] = [
    ("bare", from_bare),
    ("json", from_json),
    ("markup", from_markup),
    ("location", from_location),
];

const JOBS_PATH: &str = "/services/search/jobs/";

/// Resolve the SID of a submitted job.
///
/// # Errors
///
/// `SearchError::NoSidReturned` when no strategy matches.
pub fn extract_sid(response: &SubmitResponse) -> Result<String, SearchError> {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            strategy(response).map(|sid| {
                debug!(strategy = *name, sid = %sid, "Resolved search job SID");
                sid
            })
        })
        .ok_or(SearchError::NoSidReturned)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn from_bare(response: &SubmitResponse) -> Option<String> {
    match &response.body {
        SubmissionBody::Bare(sid) => non_empty(sid),
        _ => None,
    }
}

fn from_json(response: &SubmitResponse) -> Option<String> {
    let SubmissionBody::Json(body) = &response.body else {
        return None;
    };
    ["/sid", "/entry/0/name", "/entry/0/content/sid"]
        .iter()
        .filter_map(|pointer| body.pointer(pointer))
        .find_map(|value| match value {
            Value::String(s) => non_empty(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn from_markup(response: &SubmitResponse) -> Option<String> {
    let SubmissionBody::Markup(text) = &response.body else {
        return None;
    };
    sid_element(text).or_else(|| entry_name_attribute(text))
}

/// Text of the first `<sid>…</sid>` element.
fn sid_element(text: &str) -> Option<String> {
    let start = text.find("<sid>")? + "<sid>".len();
    let len = text[start..].find("</sid>")?;
    non_empty(&text[start..start + len])
}

/// `name="…"` attribute of the first `<entry …>` tag.
fn entry_name_attribute(text: &str) -> Option<String> {
    let tag_start = text.find("<entry")?;
    let tag_len = text[tag_start..].find('>')?;
    let tag = &text[tag_start..tag_start + tag_len];

    let value_start = tag.find("name=\"")? + "name=\"".len();
    let value_len = tag[value_start..].find('"')?;
    non_empty(&tag[value_start..value_start + value_len])
}

fn from_location(response: &SubmitResponse) -> Option<String> {
    let location = response.location.as_deref()?;
    let start = location.find(JOBS_PATH)? + JOBS_PATH.len();
    let raw = location[start..].trim_end_matches('/');
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    non_empty(&decoded)
}
