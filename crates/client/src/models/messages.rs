//! Error message envelope returned by Splunk on failed requests.

use serde::Deserialize;

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Parse an error body, returning `None` when it is not the message envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|m| !m.messages.is_empty())
    }

    /// `TYPE: text` pairs joined with `; `.
    pub fn summary(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_envelope() {
        let body = r#"{"messages":[{"type":"ERROR","text":"Unknown search command 'foo'."}]}"#;
        let messages = SplunkMessages::parse(body).unwrap();
        assert_eq!(messages.summary(), "ERROR: Unknown search command 'foo'.");
    }

    #[test]
    fn test_non_envelope_is_none() {
        assert!(SplunkMessages::parse("<html>oops</html>").is_none());
        assert!(SplunkMessages::parse(r#"{"messages":[]}"#).is_none());
    }
}
