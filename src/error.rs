use std::fmt;

use crate::http::HttpError;

/// Central error type for rbcurl
///
/// `Cli` and `Api` errors are expected, user-facing failures that end the
/// process with exit code 1. `Http` and `Runtime` errors are fatal and are
/// reported through the unhandled-error path instead.
#[derive(Debug, Clone)]
pub enum RbError {
    /// Transport failures talking to the RequestBin API
    Http(HttpError),
    /// Command-line usage errors
    Cli(CliError),
    /// Unexpected or unusable answers from the RequestBin API
    Api(ApiError),
    /// Runtime/system errors
    Runtime(String),
}

/// Command-line usage errors
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    /// No URL argument was given
    MissingUrl,
    /// The URL does not look like a RequestBin bin URL
    UnrecognizedUrl(String),
    /// Clap rejected the arguments
    InvalidArguments(String),
}

/// Application-level errors reported by the request selector
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-200 status or a body of the wrong JSON shape
    UnrecognizedResponse {
        url: String,
        status: u16,
        body: String,
    },
    /// The bin exists but holds no requests
    EmptyBin { bin_id: String },
    /// The selected record could not be decoded as a stored request
    MalformedRequest { url: String, reason: String },
}

pub const USAGE: &str = "USAGE:
rbcurl http://requestb.in/1234asdf?inspect
rbcurl http://requestb.in/1234asdf?inspect#13mgnv -p
rbcurl requestb.in/1234asdf";

impl fmt::Display for RbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbError::Http(err) => write!(f, "{err}"),
            RbError::Cli(err) => write!(f, "{err}"),
            RbError::Api(err) => write!(f, "{err}"),
            RbError::Runtime(msg) => write!(f, "Runtime error: {msg}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingUrl => write!(f, "{USAGE}"),
            CliError::UnrecognizedUrl(_) => write!(f, "Unrecognized RequestBin URL."),
            CliError::InvalidArguments(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnrecognizedResponse { url, status, body } => write!(
                f,
                "Unrecognized response from RequestBin API.\nURL: {url}\nStatus: {status}\n{body}"
            ),
            ApiError::EmptyBin { bin_id } => {
                write!(f, "No RequestBin requests exist in bin with ID \"{bin_id}\".")
            }
            ApiError::MalformedRequest { url, reason } => write!(
                f,
                "Malformed request record from RequestBin API.\nURL: {url}\n{reason}"
            ),
        }
    }
}

impl std::error::Error for RbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RbError::Http(err) => Some(err),
            RbError::Cli(err) => Some(err),
            RbError::Api(err) => Some(err),
            RbError::Runtime(_) => None,
        }
    }
}
impl std::error::Error for CliError {}
impl std::error::Error for ApiError {}

impl From<HttpError> for RbError {
    fn from(err: HttpError) -> Self {
        RbError::Http(err)
    }
}

impl From<CliError> for RbError {
    fn from(err: CliError) -> Self {
        RbError::Cli(err)
    }
}

impl From<ApiError> for RbError {
    fn from(err: ApiError) -> Self {
        RbError::Api(err)
    }
}

impl From<std::io::Error> for RbError {
    fn from(err: std::io::Error) -> Self {
        RbError::Runtime(err.to_string())
    }
}

impl RbError {
    /// True for errors that should escape `main` rather than exit cleanly
    pub fn is_fatal(&self) -> bool {
        matches!(self, RbError::Http(_) | RbError::Runtime(_))
    }

    /// Provides a helpful suggestion for how to fix the error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            RbError::Cli(CliError::UnrecognizedUrl(_)) => {
                Some("Expected something like http://requestb.in/1234asdf?inspect#13mgnv")
            }
            RbError::Api(ApiError::EmptyBin { .. }) => {
                Some("Send a request to the bin first, then run rbcurl again")
            }
            _ => None,
        }
    }
}

/// Helper function to create an unrecognized URL error
pub fn unrecognized_url(url: &str) -> RbError {
    RbError::Cli(CliError::UnrecognizedUrl(url.to_string()))
}

/// Helper function to create an unrecognized response error
pub fn unrecognized_response(url: &str, status: u16, body: &str) -> RbError {
    RbError::Api(ApiError::UnrecognizedResponse {
        url: url.to_string(),
        status,
        body: body.to_string(),
    })
}
