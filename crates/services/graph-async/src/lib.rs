#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async client for the Facebook Marketing Graph API.
//!
//! Collections are read with [`Client::fetch_all`], which follows `paging.next`
//! continuation links until the last page and folds transport, HTTP, decode and
//! in-body application errors into a single [`GraphError`].

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Page parsing and fetch requests
pub mod page;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::GraphConfig;
pub use crate::error::{ApiErrorObject, ErrorKind, GraphError};
pub use crate::page::FetchRequest;
pub use crate::types::Record;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, FetchRequest, GraphConfig};
}
