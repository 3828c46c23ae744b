//! Shared types used across Graph API endpoints

use serde::{Deserialize, Serialize};

/// One opaque record of a collection; key order is preserved as received
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One page of a Graph collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page<T = Record> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Paging block; absent on single-page collections
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Paging block of a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    /// Cursor pair for this page
    #[serde(default)]
    pub cursors: Option<Cursors>,
    /// Fully qualified URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// Fully qualified URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
}

/// Cursor pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cursors {
    /// Cursor before the first record
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor after the last record
    #[serde(default)]
    pub after: Option<String>,
}

/// Response of a `DELETE` on a Graph node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the node was deleted
    #[serde(default)]
    pub success: bool,
    /// Anything else upstream sent back
    #[serde(flatten)]
    pub extra: Record,
}

/// Response of a node-creating `POST`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatedObject {
    /// Id of the created node, when upstream returned one
    #[serde(default)]
    pub id: Option<String>,
}
