use crate::http::{HttpBackend, HttpError, HttpRequest};
use ::http::Method;
use serde_json::Value;
use tracing::{debug, info};

/// Root of the RequestBin v1 API
pub const API_BASE_URL: &str = "http://requestb.in/api/v1";

/// Result of one API call
///
/// `body` is `None` when the response text is not valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub body_text: String,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Only `200 OK` counts as success; every other status is unrecognized
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Read-only client for the RequestBin JSON API
///
/// Generic over the transport: `ReqwestBackend` for real calls, a mock in tests.
///
/// # Examples
///
/// ```
/// use rbcurl::api::ApiClient;
/// use rbcurl::http::ReqwestBackend;
///
/// # async fn example() -> Result<(), rbcurl::http::HttpError> {
/// let api = ApiClient::new(ReqwestBackend::new());
/// let response = api.list_requests("1234asdf").await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
pub struct ApiClient<B: HttpBackend + Send + Sync> {
    backend: B,
    base_url: String,
}

impl<B: HttpBackend + Send + Sync> ApiClient<B> {
    pub fn new(backend: B) -> Self {
        Self::with_base_url(backend, API_BASE_URL)
    }

    /// Point the client at another API root, e.g. a local mock server
    pub fn with_base_url(backend: B, base_url: &str) -> Self {
        Self {
            backend,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `endpoint` relative to the base URL and try to parse the body as JSON
    pub async fn call(&self, endpoint: &str) -> Result<ApiResponse, HttpError> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "calling RequestBin API");

        let request = HttpRequest::builder(url.as_str(), Method::GET)
            .header("Accept", "application/json")
            .build();
        let response = self.backend.send(&request).await?;
        info!(%url, status = response.status, "RequestBin API responded");

        let body = response.json();
        if body.is_none() {
            debug!(%url, "response body is not JSON");
        }

        Ok(ApiResponse {
            url,
            status: response.status,
            body_text: response.body,
            body,
        })
    }

    /// All requests captured in a bin
    pub async fn list_requests(&self, bin_id: &str) -> Result<ApiResponse, HttpError> {
        self.call(&list_endpoint(bin_id)).await
    }

    /// A single captured request
    pub async fn get_request(&self, bin_id: &str, request_id: &str) -> Result<ApiResponse, HttpError> {
        self.call(&request_endpoint(bin_id, request_id)).await
    }
}

// Identifiers are interpolated as-is, matching the URLs RequestBin itself hands out.
pub fn list_endpoint(bin_id: &str) -> String {
    format!("/bins/{bin_id}/requests")
}

pub fn request_endpoint(bin_id: &str, request_id: &str) -> String {
    format!("/bins/{bin_id}/requests/{request_id}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio_test::block_on;

    /// Serves canned responses and records every request it was sent
    pub(crate) struct MockBackend {
        pub requests: Mutex<Vec<HttpRequest>>,
        pub status: u16,
        pub body: String,
        pub error: Option<HttpError>,
    }

    impl MockBackend {
        pub(crate) fn replying(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                status,
                body: body.to_string(),
                error: None,
            }
        }

        pub(crate) fn failing(error: HttpError) -> Self {
            Self {
                error: Some(error),
                ..Self::replying(0, "")
            }
        }

        pub(crate) fn urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|req| req.url.clone())
                .collect()
        }
    }

    #[async_trait]
    impl HttpBackend for MockBackend {
        async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(req.clone());
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(HttpResponse {
                url: req.url.clone(),
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    #[async_trait]
    impl HttpBackend for &MockBackend {
        async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, HttpError> {
            (**self).send(req).await
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(list_endpoint("1234asdf"), "/bins/1234asdf/requests");
        assert_eq!(
            request_endpoint("1234asdf", "13mgnv"),
            "/bins/1234asdf/requests/13mgnv"
        );
    }

    #[test]
    fn test_call_resolves_url_and_parses_json() {
        let backend = MockBackend::replying(200, r#"[{"method":"GET"}]"#);
        let api = ApiClient::new(&backend);

        let resp = block_on(api.list_requests("1234asdf")).unwrap();
        assert_eq!(resp.url, "http://requestb.in/api/v1/bins/1234asdf/requests");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body_text, r#"[{"method":"GET"}]"#);
        assert!(resp.body.unwrap().is_array());

        let sent = backend.requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_call_tolerates_non_json_body() {
        let backend = MockBackend::replying(502, "Bad Gateway");
        let api = ApiClient::new(&backend);

        let resp = block_on(api.get_request("bin", "req")).unwrap();
        assert_eq!(resp.url, "http://requestb.in/api/v1/bins/bin/requests/req");
        assert_eq!(resp.status, 502);
        assert_eq!(resp.body_text, "Bad Gateway");
        assert_eq!(resp.body, None);
    }

    #[test]
    fn test_call_propagates_transport_error() {
        let backend = MockBackend::failing(HttpError::Network("dns failure".to_string()));
        let api = ApiClient::new(&backend);

        let err = block_on(api.list_requests("bin")).unwrap_err();
        assert_eq!(err, HttpError::Network("dns failure".to_string()));
    }

    #[test]
    fn test_api_response_is_ok_only_for_200() {
        let response = |status| ApiResponse {
            url: "http://requestb.in/api/v1/bins/abc/requests".to_string(),
            status,
            body_text: "[]".to_string(),
            body: Some(Value::Array(Vec::new())),
        };
        assert!(response(200).is_ok());
        for status in [201, 204, 304, 404, 500] {
            assert!(!response(status).is_ok(), "{status}");
        }
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let backend = MockBackend::replying(200, "{}");
        let api = ApiClient::with_base_url(&backend, "http://127.0.0.1:9999/api/v1/");

        block_on(api.get_request("b", "r")).unwrap();
        assert_eq!(backend.urls(), vec!["http://127.0.0.1:9999/api/v1/bins/b/requests/r"]);
    }
}
