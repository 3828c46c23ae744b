//! Tool input and output types.

use agentic_tools_core::fmt::{TextFormat, TextOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use graph_async::types::CreateAdSetRequest;

/// Input for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoInput {}

/// Input for `fetch_products_from_catalog`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogProductsInput {
    /// Catalog id (not the catalog name); list catalogs with `get_facebook_catalogs`
    pub catalog_id: String,
}

/// Input for `delete_catalog_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteProductInput {
    /// Id of the product to delete
    pub product_id: String,
}

/// Input for `fetch_ad_sets`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AdSetsInput {
    /// Ad account id (`act_...`)
    pub ad_account_id: String,
    /// Only return ad sets of this campaign
    #[serde(default)]
    pub campaign_id: Option<String>,
}

/// Input for `delete_facebook_ad_set`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteAdSetInput {
    /// Id of the ad set to delete
    pub ad_set_id: String,
}

/// Input for `search_interests`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InterestSearchInput {
    /// Keyword or phrase, e.g. "Fitness"
    pub query: String,
}

/// Input for `get_facebook_campaigns`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CampaignsInput {
    /// Ad account id (`act_...`)
    pub ad_account_id: String,
}

/// Input for `get_facebook_catalogs`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogsInput {
    /// Business id owning the catalogs
    pub business_id: String,
}

/// Input for `get_weather_by_city`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherInput {
    /// City name, optionally with a country code (`"Paris,fr"`)
    pub city_name: String,
}

/// Text answer of a tool, serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ToolText(pub String);

impl ToolText {
    /// The answer text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ToolText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl TextFormat for ToolText {
    fn fmt_text(&self, _opts: &TextOptions) -> String {
        self.0.clone()
    }
}
