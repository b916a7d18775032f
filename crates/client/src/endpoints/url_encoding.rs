//! Percent-encoding of search job IDs placed in URL paths.
//!
//! SIDs are opaque strings chosen by the server, or recovered from a
//! `Location` header, so they are encoded before being joined into
//! `/services/search/jobs/{sid}` paths.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a URL path segment.
///
/// RFC 3986 section 3.3 plus characters with special meaning in URLs.
/// `%` is included so already-encoded input is not decoded twice, and `/`
/// so a SID cannot add path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use splunk_query_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
