use std::fmt;

/// Failures of the transport itself
///
/// Any of these means no usable response was received. They are never
/// retried and callers treat them as fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Connection, DNS or TLS failure before a response arrived
    Network(String),
    /// The response body could not be read to completion
    Body(String),
    /// The request could not be built (bad URL, header or method)
    InvalidRequest(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Network(msg) => write!(f, "Network error: {msg}"),
            HttpError::Body(msg) => write!(f, "Failed to read response body: {msg}"),
            HttpError::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
        }
    }
}

impl std::error::Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HttpError::InvalidRequest(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else {
            HttpError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert!(HttpError::Body("eof".to_string())
            .to_string()
            .starts_with("Failed to read response body"));
        assert!(HttpError::InvalidRequest("bad header".to_string())
            .to_string()
            .contains("bad header"));
    }
}
