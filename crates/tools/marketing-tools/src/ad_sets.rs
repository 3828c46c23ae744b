//! Ad set tools.

use crate::MarketingTools;
use crate::types::{AdSetsInput, CreateAdSetRequest, DeleteAdSetInput};
use graph_async::GraphError;

/// Answer of `fetch_ad_sets` when nothing matched
pub const NO_AD_SETS: &str = "No ad sets found for this account or campaign.";

/// List ad sets of an account, optionally of one campaign, as a JSON array.
pub async fn fetch_ad_sets(tools: &MarketingTools, input: AdSetsInput) -> String {
    let result = tools
        .graph
        .ad_sets()
        .list(&input.ad_account_id, input.campaign_id.as_deref())
        .await;

    match result {
        Ok(sets) if sets.is_empty() => NO_AD_SETS.to_string(),
        Ok(sets) => serde_json::Value::Array(sets.into_iter().map(serde_json::Value::Object).collect())
            .to_string(),
        Err(e) => format!("Error fetching ad sets: {e}"),
    }
}

/// Validate and create an ad set; answers with the new ad set id.
pub async fn create_ad_set(tools: &MarketingTools, input: CreateAdSetRequest) -> String {
    if let Err(missing) = input.validate() {
        return missing.to_string();
    }

    match tools.graph.ad_sets().create(&input).await {
        Ok(created) => created
            .id
            .unwrap_or_else(|| "Ad set created, but the response carried no id.".to_string()),
        Err(GraphError::Http { status, body }) => {
            format!("HTTP error occurred: {status} - {body}")
        }
        Err(
            e @ (GraphError::Connection(_) | GraphError::Timeout(_) | GraphError::Transport(_)),
        ) => format!("Request error: {e}"),
        Err(e) => format!("Unexpected error: {e}"),
    }
}

/// Delete one ad set.
pub async fn delete_facebook_ad_set(tools: &MarketingTools, input: DeleteAdSetInput) -> String {
    let id = &input.ad_set_id;
    match tools.graph.ad_sets().delete(id).await {
        Ok(resp) if resp.success => format!("Ad Set `{id}` deleted successfully."),
        Ok(resp) => {
            let body = serde_json::to_string(&resp).unwrap_or_default();
            format!("Failed to delete Ad Set `{id}`. Response: {body}")
        }
        Err(e) => format!("Error deleting Ad Set: {e}"),
    }
}
