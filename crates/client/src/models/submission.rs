//! Search job submission response.

use serde_json::Value;

/// The shapes a job submission body has been observed in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionBody {
    /// No body, or only whitespace.
    Empty,
    /// A bare identifier with no markup.
    Bare(String),
    /// A JSON document.
    Json(Value),
    /// XML (Atom) or any other text that is not JSON.
    Markup(String),
}

impl SubmissionBody {
    /// Classify a raw response body.
    pub fn decode(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if !trimmed.contains('{') && !trimmed.contains('<') {
            return Self::Bare(trimmed.to_string());
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Markup(text.to_string()),
        }
    }
}

/// What the submission endpoint returned.
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub status: u16,
    /// `Location` header, when present.
    pub location: Option<String>,
    pub body: SubmissionBody,
}
