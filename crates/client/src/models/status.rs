//! Search job status.

use serde_json::Value;

/// Raw result of one status request.
#[derive(Debug, Clone)]
pub struct JobStatusResponse {
    pub status: u16,
    pub body: String,
}

impl JobStatusResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The completion signals read from a status body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobStatusSnapshot {
    pub dispatch_state: Option<String>,
    pub is_done: Option<Value>,
}

impl JobStatusSnapshot {
    /// Read the job content from `entry[0].content`, falling back to `content`.
    ///
    /// Returns `None` when the body is not JSON or carries no content object.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let content = value
            .pointer("/entry/0/content")
            .or_else(|| value.get("content"))
            .filter(|c| c.is_object())?;

        Some(Self {
            dispatch_state: content
                .get("dispatchState")
                .and_then(Value::as_str)
                .map(str::to_string),
            is_done: content.get("isDone").filter(|v| !v.is_null()).cloned(),
        })
    }

    /// True once Splunk reports the job finished.
    pub fn is_done(&self) -> bool {
        let state_done = self
            .dispatch_state
            .as_deref()
            .is_some_and(|s| s.to_ascii_uppercase().contains("DONE"));
        let flag_done = match &self.is_done {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        };
        state_done || flag_done
    }
}
