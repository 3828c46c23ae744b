//! Request and response types for the Graph API

/// Ad set types
pub mod adsets;
/// Shared types used across endpoints
pub mod common;
/// Field selections per resource
pub mod fields;
/// Targeting search types
pub mod search;

pub use adsets::{CreateAdSetRequest, TargetingEntity};
pub use common::*;
pub use search::Interest;
