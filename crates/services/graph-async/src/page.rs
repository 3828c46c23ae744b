//! Fetch requests and the single boundary where untrusted page JSON is parsed.

use serde_json::Value;

use crate::error::{ApiErrorObject, GraphError, map_deser};
use crate::types::{Page, Record};

/// A paged collection request: a path below the API base plus query parameters.
///
/// Parameters keep insertion order; upstream does not care about ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    path: String,
    params: Vec<(String, String)>,
}

impl FetchRequest {
    /// Creates a request for the given collection path (e.g. `"{catalog_id}/products"`)
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Adds a query parameter; numbers go through `ToString`
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Sets the `fields` selection
    #[must_use]
    pub fn fields(self, fields: &[&str]) -> Self {
        self.param("fields", fields.join(","))
    }

    /// Sets the page size (`limit`)
    #[must_use]
    pub fn limit(self, page_size: u32) -> Self {
        self.param("limit", page_size)
    }

    /// Collection path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Parses one response body into a [`Page`].
///
/// An `error` key wins over everything else, so API errors delivered with
/// HTTP 200 are never mistaken for data.
///
/// # Errors
///
/// - [`GraphError::Decode`] if the body is not JSON, or not page-shaped.
/// - [`GraphError::Api`] if the body carries an `error` object.
pub fn parse_page(body: &[u8]) -> Result<Page, GraphError> {
    let value = parse_body(body)?;
    serde_json::from_value(value).map_err(|e| map_deser(&e, body))
}

/// Parses one response body as JSON and surfaces an embedded `error` object.
///
/// # Errors
///
/// Same as [`parse_page`], minus the page-shape check.
pub fn parse_body(body: &[u8]) -> Result<Value, GraphError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| map_deser(&e, body))?;
    if let Some(err) = value.get("error") {
        return Err(GraphError::Api(api_error_from(err)));
    }
    Ok(value)
}

fn api_error_from(err: &Value) -> ApiErrorObject {
    match err {
        Value::Object(_) => serde_json::from_value(err.clone()).unwrap_or_default(),
        Value::String(message) => ApiErrorObject {
            message: message.clone(),
            ..Default::default()
        },
        _ => ApiErrorObject::default(),
    }
}

/// Returns the continuation link of a page, treating an empty string as absent
#[must_use]
pub fn next_link(page: &Page) -> Option<&str> {
    page.paging
        .as_ref()
        .and_then(|p| p.next.as_deref())
        .filter(|next| !next.is_empty())
}

/// Moves the records out of a page
#[must_use]
pub fn into_records(page: Page) -> Vec<Record> {
    page.data
}
