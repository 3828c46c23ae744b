//! Tool trait implementations and registry builder.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use agentic_tools_core::ToolRegistry;
use agentic_tools_core::context::ToolContext;
use agentic_tools_core::error::ToolError;
use agentic_tools_core::tool::Tool;
use futures::future::BoxFuture;

use crate::MarketingTools;
use crate::types::{
    AdSetsInput, CampaignsInput, CatalogProductsInput, CatalogsInput, CreateAdSetRequest,
    DeleteAdSetInput, DeleteProductInput, InterestSearchInput, NoInput, ToolText, WeatherInput,
};

/// Runs a tool body, logging the call and its duration.
///
/// Upstream failures are already part of the text, so the result is always `Ok`.
fn answer<F>(name: &'static str, body: F) -> BoxFuture<'static, Result<ToolText, ToolError>>
where
    F: Future<Output = String> + Send + 'static,
{
    Box::pin(async move {
        let started = Instant::now();
        tracing::info!(tool = name, "tool call");
        let text = body.await;
        tracing::info!(
            tool = name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tool finished"
        );
        Ok(ToolText(text))
    })
}

// ============================================================================
// Products
// ============================================================================

/// Fetch all products of a catalog.
#[derive(Clone)]
pub struct FetchProductsFromCatalog {
    tools: Arc<MarketingTools>,
}

impl FetchProductsFromCatalog {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for FetchProductsFromCatalog {
    type Input = CatalogProductsInput;
    type Output = ToolText;

    const NAME: &'static str = "fetch_products_from_catalog";
    const DESCRIPTION: &'static str = "Fetch all products from a Facebook catalog by catalog id (not name). Answers with a JSON-RPC envelope holding one text entry per product with id, name, description, price, image_url, url and availability.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::products::fetch_products_from_catalog(&tools, input).await
        })
    }
}

/// Delete a catalog product.
#[derive(Clone)]
pub struct DeleteCatalogProduct {
    tools: Arc<MarketingTools>,
}

impl DeleteCatalogProduct {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for DeleteCatalogProduct {
    type Input = DeleteProductInput;
    type Output = ToolText;

    const NAME: &'static str = "delete_catalog_product";
    const DESCRIPTION: &'static str = "Delete a product from a Facebook catalog by product id. Show the products first and let the user pick which one to delete.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::products::delete_catalog_product(&tools, input).await
        })
    }
}

// ============================================================================
// Ad sets
// ============================================================================

/// List ad sets of an ad account.
#[derive(Clone)]
pub struct FetchAdSets {
    tools: Arc<MarketingTools>,
}

impl FetchAdSets {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for FetchAdSets {
    type Input = AdSetsInput;
    type Output = ToolText;

    const NAME: &'static str = "fetch_ad_sets";
    const DESCRIPTION: &'static str = "Fetch the ad sets of a Facebook ad account (see get_facebook_ad_accounts), optionally only those of one campaign. Ask the user for the campaign first.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::ad_sets::fetch_ad_sets(&tools, input).await
        })
    }
}

/// Create an ad set.
#[derive(Clone)]
pub struct CreateAdSet {
    tools: Arc<MarketingTools>,
}

impl CreateAdSet {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for CreateAdSet {
    type Input = CreateAdSetRequest;
    type Output = ToolText;

    const NAME: &'static str = "create_ad_set";
    const DESCRIPTION: &'static str = "Create an ad set with targeting under an ad account and campaign. Do not invent ids: take the ad account from get_facebook_ad_accounts, the campaign from get_facebook_campaigns, interests from search_interests and behaviors from get_behavior_ids. daily_budget is in cents (minimum 1000). Answers with the new ad set id or an error message.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::ad_sets::create_ad_set(&tools, input).await
        })
    }
}

/// Delete an ad set.
#[derive(Clone)]
pub struct DeleteFacebookAdSet {
    tools: Arc<MarketingTools>,
}

impl DeleteFacebookAdSet {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for DeleteFacebookAdSet {
    type Input = DeleteAdSetInput;
    type Output = ToolText;

    const NAME: &'static str = "delete_facebook_ad_set";
    const DESCRIPTION: &'static str = "Delete a Facebook ad set by id.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::ad_sets::delete_facebook_ad_set(&tools, input).await
        })
    }
}

// ============================================================================
// Targeting
// ============================================================================

/// Interest targeting search.
#[derive(Clone)]
pub struct SearchInterests {
    tools: Arc<MarketingTools>,
}

impl SearchInterests {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for SearchInterests {
    type Input = InterestSearchInput;
    type Output = ToolText;

    const NAME: &'static str = "search_interests";
    const DESCRIPTION: &'static str = "Search Facebook interest targeting options by keyword (e.g. \"Marketing\", \"Fitness\"). Answers with up to 5 interests, each with an id and name usable in create_ad_set.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::targeting::search_interests(&tools, input).await
        })
    }
}

/// Static behavior table.
#[derive(Clone, Copy, Default)]
pub struct GetBehaviorIds;

impl Tool for GetBehaviorIds {
    type Input = NoInput;
    type Output = ToolText;

    const NAME: &'static str = "get_behavior_ids";
    const DESCRIPTION: &'static str = "Get common Facebook behavior targeting options as a map of behavior name to id, for use in create_ad_set.";

    fn call(
        &self,
        _input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        answer(Self::NAME, async { crate::targeting::get_behavior_ids() })
    }
}

// ============================================================================
// Accounts, campaigns, catalogs
// ============================================================================

/// List ad accounts.
#[derive(Clone)]
pub struct GetFacebookAdAccounts {
    tools: Arc<MarketingTools>,
}

impl GetFacebookAdAccounts {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for GetFacebookAdAccounts {
    type Input = NoInput;
    type Output = ToolText;

    const NAME: &'static str = "get_facebook_ad_accounts";
    const DESCRIPTION: &'static str = "List the Facebook ad accounts available to the configured access token.";

    fn call(
        &self,
        _input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::accounts::get_facebook_ad_accounts(&tools).await
        })
    }
}

/// List campaigns.
#[derive(Clone)]
pub struct GetFacebookCampaigns {
    tools: Arc<MarketingTools>,
}

impl GetFacebookCampaigns {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for GetFacebookCampaigns {
    type Input = CampaignsInput;
    type Output = ToolText;

    const NAME: &'static str = "get_facebook_campaigns";
    const DESCRIPTION: &'static str = "List the campaigns of a Facebook ad account.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::accounts::get_facebook_campaigns(&tools, input).await
        })
    }
}

/// List product catalogs.
#[derive(Clone)]
pub struct GetFacebookCatalogs {
    tools: Arc<MarketingTools>,
}

impl GetFacebookCatalogs {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for GetFacebookCatalogs {
    type Input = CatalogsInput;
    type Output = ToolText;

    const NAME: &'static str = "get_facebook_catalogs";
    const DESCRIPTION: &'static str = "List the product catalogs owned by a Facebook business. Let the user choose a catalog before fetching its products.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::accounts::get_facebook_catalogs(&tools, input).await
        })
    }
}

// ============================================================================
// Weather
// ============================================================================

/// Current weather by city.
#[derive(Clone)]
pub struct GetWeatherByCity {
    tools: Arc<MarketingTools>,
}

impl GetWeatherByCity {
    /// Create the tool over shared state.
    #[must_use]
    pub const fn new(tools: Arc<MarketingTools>) -> Self {
        Self { tools }
    }
}

impl Tool for GetWeatherByCity {
    type Input = WeatherInput;
    type Output = ToolText;

    const NAME: &'static str = "get_weather_by_city";
    const DESCRIPTION: &'static str = "Get the current weather for a city: temperature, description, humidity and wind speed. Always ask the user for a city first.";

    fn call(
        &self,
        input: Self::Input,
        _ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        answer(Self::NAME, async move {
            crate::weather::get_weather_by_city(&tools, input).await
        })
    }
}

// ============================================================================
// Registry Builder
// ============================================================================

/// Build a `ToolRegistry` containing all marketing and weather tools.
pub fn build_registry(tools: Arc<MarketingTools>) -> ToolRegistry {
    ToolRegistry::builder()
        .register::<FetchProductsFromCatalog, ()>(FetchProductsFromCatalog::new(Arc::clone(
            &tools,
        )))
        .register::<DeleteCatalogProduct, ()>(DeleteCatalogProduct::new(Arc::clone(&tools)))
        .register::<FetchAdSets, ()>(FetchAdSets::new(Arc::clone(&tools)))
        .register::<CreateAdSet, ()>(CreateAdSet::new(Arc::clone(&tools)))
        .register::<DeleteFacebookAdSet, ()>(DeleteFacebookAdSet::new(Arc::clone(&tools)))
        .register::<SearchInterests, ()>(SearchInterests::new(Arc::clone(&tools)))
        .register::<GetBehaviorIds, ()>(GetBehaviorIds)
        .register::<GetFacebookAdAccounts, ()>(GetFacebookAdAccounts::new(Arc::clone(&tools)))
        .register::<GetFacebookCampaigns, ()>(GetFacebookCampaigns::new(Arc::clone(&tools)))
        .register::<GetFacebookCatalogs, ()>(GetFacebookCatalogs::new(Arc::clone(&tools)))
        .register::<GetWeatherByCity, ()>(GetWeatherByCity::new(tools))
        .finish()
}
