/// An HTTP response with its status and the full body as text
///
/// # Examples
///
/// ```
/// use rbcurl::http::HttpResponse;
///
/// let response = HttpResponse {
///     url: "http://requestb.in/api/v1/bins/abc/requests".to_string(),
///     status: 200,
///     body: "[]".to_string(),
/// };
///
/// assert!(response.json().unwrap().is_array());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// URL the request was sent to
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON, yielding `None` for anything that is not valid JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}
