//! Query text normalization.
//!
//! Queries are stored without a leading `search` keyword; the REST submission
//! adds it back when building the form body.

const SEARCH_KEYWORD: &str = "search";

/// Trim `raw` and strip a leading case-insensitive `search ` keyword.
///
/// Returns `None` for a blank query.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = match trimmed.get(..SEARCH_KEYWORD.len()) {
        Some(head) if head.eq_ignore_ascii_case(SEARCH_KEYWORD) => {
            let rest = &trimmed[SEARCH_KEYWORD.len()..];
            if rest.starts_with(char::is_whitespace) {
                rest.trim_start()
            } else {
                trimmed
            }
        }
        _ => trimmed,
    };
    Some(stripped.to_string())
}

/// The `search` form value for a normalized query.
///
/// Generating commands (leading `|`) must not be prefixed.
pub fn submission_text(query: &str) -> String {
    if query.starts_with('|') {
        query.to_string()
    } else {
        format!("{SEARCH_KEYWORD} {query}")
    }
}
