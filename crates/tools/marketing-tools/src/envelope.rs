//! JSON-RPC shaped envelopes returned by the Graph collection tools.
//!
//! The envelope is plain text from the MCP point of view; clients parse it to get
//! either one content entry per record or a coded error.

use graph_async::{GraphError, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream error object embedded in a 200 response
pub const APPLICATION_ERROR: i64 = -32000;
/// Local configuration problem, such as a missing access token
pub const CONFIG_ERROR: i64 = -32001;
/// DNS failure or refused connection
pub const CONNECTION_ERROR: i64 = -32002;
/// Request timed out
pub const TIMEOUT_ERROR: i64 = -32003;
/// Any other transport failure
pub const TRANSPORT_ERROR: i64 = -32004;
/// Response body was not JSON
pub const DECODE_ERROR: i64 = -32005;
/// Everything else
pub const UNEXPECTED_ERROR: i64 = -32006;

const JSONRPC_VERSION: &str = "2.0";

/// A complete envelope: `{"jsonrpc":"2.0","id":null,"result"|"error":...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Always `null`; tools do not see the request id
    pub id: Option<Value>,
    /// Result or error
    #[serde(flatten)]
    pub body: Body,
}

/// Outcome carried by an [`Envelope`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    /// Fetched records
    Result(ContentResult),
    /// Normalized failure
    Error(RpcError),
}

/// Success payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    /// One text entry per record
    pub content: Vec<TextContent>,
    /// Always `false`
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Set when there were no records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A `{"type":"text","text":...}` content entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// Always `"text"`
    #[serde(rename = "type")]
    pub kind: String,
    /// A record serialized as compact JSON
    pub text: String,
}

/// Failure payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// HTTP status for HTTP failures, otherwise one of the `*_ERROR` codes
    pub code: i64,
    /// Human-readable message
    pub message: String,
    /// Upstream error object, for application errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Wraps records; `empty_message` is attached when there are none.
    #[must_use]
    pub fn from_records(records: &[Record], empty_message: &str) -> Self {
        let content = records
            .iter()
            .map(|record| TextContent {
                kind: "text".into(),
                text: Value::Object(record.clone()).to_string(),
            })
            .collect::<Vec<_>>();
        let message = content.is_empty().then(|| empty_message.to_string());

        Self::new(Body::Result(ContentResult {
            content,
            is_error: false,
            message,
        }))
    }

    /// Wraps a normalized error.
    #[must_use]
    pub fn from_error(err: &GraphError) -> Self {
        Self::new(Body::Error(RpcError::from(err)))
    }

    /// Wraps a fetch outcome.
    #[must_use]
    pub fn from_fetch(result: &Result<Vec<Record>, GraphError>, empty_message: &str) -> Self {
        match result {
            Ok(records) => Self::from_records(records, empty_message),
            Err(err) => Self::from_error(err),
        }
    }

    fn new(body: Body) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id: None,
            body,
        }
    }

    /// Compact JSON text
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({
                "jsonrpc": JSONRPC_VERSION,
                "id": null,
                "error": {
                    "code": UNEXPECTED_ERROR,
                    "message": format!("An unexpected error occurred in the tool: {e}"),
                }
            })
            .to_string()
        })
    }

    /// Records decoded back from the content entries, for success envelopes
    #[must_use]
    pub fn records(&self) -> Option<Vec<Value>> {
        match &self.body {
            Body::Result(result) => result
                .content
                .iter()
                .map(|c| serde_json::from_str(&c.text).ok())
                .collect(),
            Body::Error(_) => None,
        }
    }
}

impl From<&GraphError> for RpcError {
    fn from(err: &GraphError) -> Self {
        let (code, message, data) = match err {
            GraphError::Http { status, body } => (
                i64::from(*status),
                format!("HTTP Error during Facebook API call: {status} - {body}"),
                None,
            ),
            GraphError::Api(obj) => {
                let message = if obj.message.is_empty() {
                    "Unknown API error"
                } else {
                    obj.message.as_str()
                };
                (
                    APPLICATION_ERROR,
                    format!("Facebook API Error: {message}"),
                    serde_json::to_value(obj).ok(),
                )
            }
            GraphError::Config(msg) => (CONFIG_ERROR, format!("Invalid configuration: {msg}"), None),
            GraphError::Connection(e) => (
                CONNECTION_ERROR,
                format!("Network connection error during Facebook API call: {e}"),
                None,
            ),
            GraphError::Timeout(e) => (
                TIMEOUT_ERROR,
                format!("Request timed out during Facebook API call: {e}"),
                None,
            ),
            GraphError::Transport(e) => (
                TRANSPORT_ERROR,
                format!("An unexpected requests error occurred: {e}"),
                None,
            ),
            GraphError::Decode(msg) => (
                DECODE_ERROR,
                format!("Failed to decode JSON response from Facebook API: {msg}"),
                None,
            ),
            GraphError::PageLimit { .. } => (
                UNEXPECTED_ERROR,
                format!("An unexpected error occurred in the tool: {err}"),
                None,
            ),
        };
        Self {
            code,
            message,
            data,
        }
    }
}
