//! Targeting lookups: interest search and the behavior table.

use serde_json::{Map, Value};

use crate::MarketingTools;
use crate::types::InterestSearchInput;
use graph_async::types::fields::INTEREST_SEARCH_LIMIT;

/// Common behavior targeting options, name to id
pub const BEHAVIORS: &[(&str, &str)] = &[
    ("Small Business Owners", "6071631541183"),
    ("Frequent Travelers", "6002714895372"),
    ("Frequent International Travelers", "6003139266461"),
    ("Frequent Luxury Travelers", "6003409043876"),
    ("Frequent Business Travelers", "6003020834694"),
    ("Frequent Domestic Travelers", "6002714898572"),
    ("Frequent Travelers - All Types", "6002714895372"),
];

/// Search interests by keyword; answers with a JSON array of interests.
///
/// A failed search answers with a one-element array holding an `error` string.
pub async fn search_interests(tools: &MarketingTools, input: InterestSearchInput) -> String {
    match tools
        .graph
        .search()
        .interests(&input.query, INTEREST_SEARCH_LIMIT)
        .await
    {
        Ok(interests) => serde_json::to_string(&interests).unwrap_or_else(|e| error_list(&e)),
        Err(e) => error_list(&e),
    }
}

fn error_list(e: &dyn std::fmt::Display) -> String {
    serde_json::json!([{ "error": format!("Error searching interests: {e}") }]).to_string()
}

/// The behavior table as a JSON object, in table order.
#[must_use]
pub fn get_behavior_ids() -> String {
    let map: Map<String, Value> = BEHAVIORS
        .iter()
        .map(|(name, id)| ((*name).to_string(), Value::String((*id).to_string())))
        .collect();
    Value::Object(map).to_string()
}
