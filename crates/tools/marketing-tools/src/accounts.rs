//! Account, campaign and catalog listings, answered as envelopes.

use crate::MarketingTools;
use crate::envelope::Envelope;
use crate::types::{CampaignsInput, CatalogsInput};

/// Message attached to an empty ad account envelope
pub const NO_AD_ACCOUNTS: &str = "No ad accounts found.";
/// Message attached to an empty campaign envelope
pub const NO_CAMPAIGNS: &str = "No campaigns found for this ad account.";
/// Message attached to an empty catalog envelope
pub const NO_CATALOGS: &str = "No catalogs found for this business.";

/// Ad accounts of the token's user.
pub async fn get_facebook_ad_accounts(tools: &MarketingTools) -> String {
    let result = tools.graph.ad_accounts().list().await;
    Envelope::from_fetch(&result, NO_AD_ACCOUNTS).to_json()
}

/// Campaigns of an ad account.
pub async fn get_facebook_campaigns(tools: &MarketingTools, input: CampaignsInput) -> String {
    let result = tools.graph.campaigns().list(&input.ad_account_id).await;
    Envelope::from_fetch(&result, NO_CAMPAIGNS).to_json()
}

/// Product catalogs owned by a business.
pub async fn get_facebook_catalogs(tools: &MarketingTools, input: CatalogsInput) -> String {
    let result = tools.graph.catalogs().list(&input.business_id).await;
    Envelope::from_fetch(&result, NO_CATALOGS).to_json()
}
