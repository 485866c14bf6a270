//! Parsing of RequestBin URLs such as `http://requestb.in/1234asdf?inspect#13mgnv`.

use crate::error::{unrecognized_url, RbError};
use lazy_static::lazy_static;
use regex::Regex;

/// Identifiers pulled out of a bin URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinUrl {
    /// Bin identifier, never empty
    pub bin_id: String,
    /// Request identifier from the `#fragment`; `None` means the latest request
    pub request_id: Option<String>,
}

lazy_static! {
    static ref BIN_URL: Regex = Regex::new(
        r"(?i)^\s*(?:https?://)?(?:www\.)?requestb\.in(?::\d+)?/(.+?)(?:\?.*?)?(?:#(.*?))?\s*$"
    )
    .expect("bin URL pattern is valid");
}

/// Parse a free-form RequestBin URL into its bin and request identifiers
///
/// The scheme, `www.` prefix, port, query string and fragment are all
/// optional; the query string is ignored. Both identifiers are
/// percent-decoded. An empty fragment counts as no request identifier.
///
/// # Examples
///
/// ```
/// use rbcurl::bin_url::parse_bin_url;
///
/// let parsed = parse_bin_url("http://requestb.in/1234asdf?inspect#13mgnv").unwrap();
/// assert_eq!(parsed.bin_id, "1234asdf");
/// assert_eq!(parsed.request_id.as_deref(), Some("13mgnv"));
///
/// assert!(parse_bin_url("https://example.com/1234asdf").is_err());
/// ```
pub fn parse_bin_url(input: &str) -> Result<BinUrl, RbError> {
    let captures = BIN_URL
        .captures(input)
        .ok_or_else(|| unrecognized_url(input))?;

    let bin_id = match captures.get(1) {
        Some(segment) => decode_segment(segment.as_str(), input)?,
        None => return Err(unrecognized_url(input)),
    };
    if bin_id.is_empty() {
        return Err(unrecognized_url(input));
    }

    let request_id = match captures.get(2).map(|m| m.as_str()) {
        Some(segment) if !segment.is_empty() => Some(decode_segment(segment, input)?),
        _ => None,
    };

    Ok(BinUrl { bin_id, request_id })
}

// Every `%` must start a two-digit hex escape; `urlencoding` would pass a
// malformed one through untouched.
fn decode_segment(segment: &str, input: &str) -> Result<String, RbError> {
    let bytes = segment.as_bytes();
    for (i, _) in segment.match_indices('%') {
        match bytes.get(i + 1..i + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {}
            _ => return Err(unrecognized_url(input)),
        }
    }
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| unrecognized_url(input))
}
