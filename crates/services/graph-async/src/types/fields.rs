//! Field selections sent as `fields=` for each resource.

/// Catalog product fields
pub const PRODUCT_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "price",
    "image_url",
    "url",
    "availability",
];

/// Ad set fields
pub const AD_SET_FIELDS: &[&str] = &[
    "name",
    "id",
    "daily_budget",
    "billing_event",
    "optimization_goal",
    "bid_strategy",
    "status",
    "targeting",
];

/// Ad account fields
pub const AD_ACCOUNT_FIELDS: &[&str] = &["id", "account_id", "name", "currency", "account_status"];

/// Campaign fields
pub const CAMPAIGN_FIELDS: &[&str] = &["id", "name", "objective", "status"];

/// Product catalog fields
pub const CATALOG_FIELDS: &[&str] = &["id", "name", "product_count"];

/// Page size used for product listing
pub const PRODUCT_PAGE_SIZE: u32 = 100;

/// Page size used for the other collections
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Number of interests returned by a targeting search
pub const INTEREST_SEARCH_LIMIT: u32 = 5;
