//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a query component (RFC 3986 unreserved)
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a value for use inside a query string
///
/// # Examples
/// ```ignore
/// encode_query("UU x&y") // -> "UU%20x%26y"
/// ```
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Encode a URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, QUERY_COMPONENT).to_string()
}

/// The path segment following `marker` in a URL, without query or fragment
///
/// # Examples
/// ```ignore
/// segment_after("https://open.spotify.com/artist/abc?si=1", "/artist/") // -> Some("abc")
/// ```
pub fn segment_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let segment = &rest[..end];
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}
