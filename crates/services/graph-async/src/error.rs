use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cap on response body characters kept in decode error messages
const BODY_SNIPPET_CHARS: usize = 400;

/// Errors that can occur when using the Graph API client
#[derive(Debug, Error)]
pub enum GraphError {
    /// DNS failure or refused connection before any response arrived
    #[error("connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The request timed out
    #[error("timeout: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Any other transport-level failure
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Body was not JSON or not shaped as expected
    #[error("decode error: {0}")]
    Decode(String),

    /// Error object embedded in the response body
    #[error("API error: {}", .0.message)]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Continuation links kept coming past the configured cap
    #[error("pagination exceeded {max_pages} pages")]
    PageLimit {
        /// The configured cap
        max_pages: usize,
    },
}

/// Discriminant of a [`GraphError`], used by callers to pick a response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network connection failure
    Connection,
    /// Request timeout
    Timeout,
    /// Other transport failure
    Transport,
    /// Non-success HTTP status
    Http,
    /// Undecodable body
    Decode,
    /// Upstream application error inside a response body
    Application,
    /// Local configuration problem
    Config,
    /// Anything else
    Unexpected,
}

/// Error object returned by the Graph API under the `error` key
///
/// Unknown fields are kept in `extra` so the whole object can be echoed back to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Error type, e.g. `OAuthException`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Numeric error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Numeric error subcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    /// Facebook trace id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fbtrace_id: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GraphError {
    /// Returns the error discriminant
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) => ErrorKind::Connection,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Http { .. } => ErrorKind::Http,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Api(_) => ErrorKind::Application,
            Self::Config(_) => ErrorKind::Config,
            Self::PageLimit { .. } => ErrorKind::Unexpected,
        }
    }

    /// Returns the HTTP status code, when the failure carried one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the upstream error object for application errors
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiErrorObject> {
        match self {
            Self::Api(obj) => Some(obj),
            _ => None,
        }
    }
}

/// The request URL is dropped: it carries `access_token` in its query string.
impl From<reqwest::Error> for GraphError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_timeout() {
            Self::Timeout(e)
        } else if e.is_connect() {
            Self::Connection(e)
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e)
        }
    }
}

/// Lossy view of a response body, cut after [`BODY_SNIPPET_CHARS`] characters
#[must_use]
pub fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((cut, _)) => text[..cut].to_owned(),
        None => text.into_owned(),
    }
}

/// Maps a serde deserialization error to a `GraphError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> GraphError {
    GraphError::Decode(format!("{e}: {}", body_snippet(body)))
}

/// Builds the error for a non-success HTTP response, keeping the whole body
#[must_use]
pub fn http_error(status: StatusCode, body: &[u8]) -> GraphError {
    GraphError::Http {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
