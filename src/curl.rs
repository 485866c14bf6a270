//! Rendering a stored request as a `curl` command line.

use crate::model::StoredRequest;

const PRETTY_SEPARATOR: &str = " \\\n  ";

/// Build the `curl` invocation that replays `request`
///
/// Arguments come in a fixed order: method, headers in input order, body,
/// then the rebuilt query string as the final positional argument. The
/// final argument is only the query string (e.g. `'?a=1'`); no host or path
/// is added. With `pretty` every argument goes on its own continued line.
///
/// # Examples
///
/// ```
/// use rbcurl::curl::format_curl_command;
/// use rbcurl::model::StoredRequest;
///
/// let request = StoredRequest {
///     method: "POST".to_string(),
///     headers: vec![("Content-Type".to_string(), "application/json".to_string())],
///     raw: r#"{"x":1}"#.to_string(),
///     query_string: vec![("a".to_string(), "1".to_string())],
///     time: None,
/// };
/// assert_eq!(
///     format_curl_command(&request, false),
///     r#"curl -X 'POST' -H 'Content-Type: application/json' -d '{"x":1}' '?a=1'"#
/// );
/// ```
pub fn format_curl_command(request: &StoredRequest, pretty: bool) -> String {
    let mut args = Vec::with_capacity(request.headers.len() + 3);
    args.push(format!("-X {}", escape_shell_arg(&request.method)));
    for (name, value) in &request.headers {
        args.push(format!("-H {}", escape_shell_arg(&format!("{name}: {value}"))));
    }
    args.push(format!("-d {}", escape_shell_arg(&request.raw)));
    args.push(escape_shell_arg(&encode_query_string(&request.query_string)));

    let separator = if pretty { PRETTY_SEPARATOR } else { " " };
    format!("curl{separator}{}", args.join(separator))
}

/// Quote `value` for a POSIX shell
///
/// The value is wrapped in single quotes; each embedded `'` becomes `'\''`.
pub fn escape_shell_arg(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Rebuild a `?name=value&...` query string from decoded pairs
///
/// Returns an empty string when there are no pairs.
pub fn encode_query_string(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{encoded}")
}

/// Percent-encode with `encodeURIComponent` semantics
///
/// `urlencoding` only leaves `A-Z a-z 0-9 - . _ ~` alone, so the remaining
/// marks that `encodeURIComponent` keeps literal are restored afterwards.
fn encode_component(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    if !encoded.contains('%') {
        return encoded.into_owned();
    }
    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
