//! Targeting search types

use serde::{Deserialize, Serialize};

use super::Record;

/// An interest targeting option returned by `search?type=adinterest`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    /// Interest id
    pub id: String,
    /// Interest name
    pub name: String,
    /// Estimated audience size, lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_size_lower_bound: Option<u64>,
    /// Estimated audience size, upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_size_upper_bound: Option<u64>,
    /// Category path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Remaining upstream fields (`audience_size`, `disambiguation_category`, ...)
    #[serde(flatten)]
    pub extra: Record,
}
