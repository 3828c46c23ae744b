//! API resource implementations for the Graph client

/// Ad account listing
pub mod ad_accounts;
/// Ad set listing, creation and deletion
pub mod ad_sets;
/// Campaign listing
pub mod campaigns;
/// Product catalog listing
pub mod catalogs;
/// Catalog product listing and deletion
pub mod products;
/// Targeting search
pub mod search;

pub use ad_accounts::AdAccounts;
pub use ad_sets::AdSets;
pub use campaigns::Campaigns;
pub use catalogs::Catalogs;
pub use products::Products;
pub use search::Search;
