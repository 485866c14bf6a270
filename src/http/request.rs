use ::http::{HeaderMap, HeaderName, HeaderValue, Method};

/// Builder for constructing HTTP requests with a fluent API
///
/// Headers that fail to parse as a valid name or value are skipped.
///
/// # Examples
///
/// ```
/// use rbcurl::http::RequestBuilder;
/// use http::Method;
///
/// let request = RequestBuilder::new("http://requestb.in/api/v1/bins/abc/requests", Method::GET)
///     .header("Accept", "application/json")
///     .build();
/// assert_eq!(request.headers.get("accept").unwrap(), "application/json");
/// ```
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    method: Method,
    headers: HeaderMap,
}

impl RequestBuilder {
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HeaderMap::new(),
        }
    }

    /// Add a header to the request, replacing any previous value
    pub fn header(mut self, key: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (key.parse::<HeaderName>(), value.parse::<HeaderValue>()) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn build(self) -> HttpRequest {
        HttpRequest {
            url: self.url,
            method: self.method,
            headers: self.headers,
        }
    }
}

/// An outgoing HTTP request
///
/// The RequestBin API is read-only, so requests never carry a body.
#[derive(Debug, PartialEq, Clone)]
pub struct HttpRequest {
    /// Fully resolved target URL
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn builder(url: impl Into<String>, method: Method) -> RequestBuilder {
        RequestBuilder::new(url, method)
    }
}
