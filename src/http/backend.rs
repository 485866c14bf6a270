use crate::http::{error::HttpError, request::HttpRequest, response::HttpResponse};
use async_trait::async_trait;
use tracing::debug;

/// Trait for HTTP backends that handle the actual network communication
///
/// Keeps the API client backend-agnostic so tests can substitute a mock for
/// the reqwest implementation.
///
/// # Examples
///
/// ```
/// use rbcurl::http::{HttpBackend, HttpRequest, HttpResponse, HttpError};
/// use async_trait::async_trait;
///
/// struct LoggingBackend<B: HttpBackend> {
///     inner: B,
/// }
///
/// #[async_trait]
/// impl<B: HttpBackend + Send + Sync> HttpBackend for LoggingBackend<B> {
///     async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, HttpError> {
///         eprintln!("GET {}", req.url);
///         self.inner.send(req).await
///     }
/// }
/// ```
#[async_trait]
pub trait HttpBackend {
    /// Send a request and return the response with its body fully read
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production backend that performs real network requests through reqwest
///
/// Redirect and TLS behavior are whatever reqwest does by default.
#[derive(Clone, Default)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, HttpError> {
        debug!(method = %req.method, url = %req.url, "sending request");
        let resp = self
            .client
            .request(req.method.clone(), &req.url)
            .headers(req.headers.clone())
            .send()
            .await?;

        let url = resp.url().to_string();
        let status = resp.status().as_u16();
        // Chunks are buffered into this response's own body string.
        let body = resp.text().await?;
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { url, status, body })
    }
}
