//! Types for ad set creation

use serde::{Deserialize, Serialize};

/// Minimum daily budget accepted by the ad set endpoint, in cents
pub const MIN_DAILY_BUDGET: i64 = 1000;

/// An `{id, name}` pair used for interest and behavior targeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TargetingEntity {
    /// Graph id of the interest or behavior
    pub id: String,
    /// Display name
    pub name: String,
}

/// Geographic targeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocations {
    /// ISO country codes
    pub countries: Vec<String>,
}

/// One flexible targeting spec; interests and behaviors within it are OR-ed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleSpec {
    /// Interest targeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<TargetingEntity>>,
    /// Behavior targeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behaviors: Option<Vec<TargetingEntity>>,
}

/// Targeting spec sent JSON-encoded in the `targeting` form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingSpec {
    /// Countries to target
    pub geo_locations: GeoLocations,
    /// Minimum age
    pub age_min: u32,
    /// Maximum age
    pub age_max: u32,
    /// Flexible spec, present only when interests or behaviors were given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexible_spec: Option<Vec<FlexibleSpec>>,
}

/// Request to create an ad set under an ad account
///
/// Every field defaults when absent so that [`CreateAdSetRequest::validate`] can
/// report all missing fields at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct CreateAdSetRequest {
    /// Ad account id (`act_...`)
    pub ad_account_id: String,
    /// Ad set name
    pub name: String,
    /// Daily budget in cents
    pub daily_budget: i64,
    /// `IMPRESSIONS` or `LINK_CLICKS`
    pub billing_event: String,
    /// `LINK_CLICKS`, `REACH` or `IMPRESSIONS`
    pub optimization_goal: String,
    /// `LOWEST_COST_WITHOUT_CAP`, `COST_CAP` or `BID_CAP`
    pub bid_strategy: String,
    /// `PAUSED` or `ACTIVE`
    pub status: String,
    /// Parent campaign id
    pub campaign_id: String,
    /// Country codes
    pub countries: Vec<String>,
    /// Minimum age (13-65)
    pub age_min: u32,
    /// Maximum age (13-65)
    pub age_max: u32,
    /// Interest targeting, as returned by interest search
    pub interests: Vec<TargetingEntity>,
    /// Behavior targeting, as listed by the behavior table
    pub behaviors: Vec<TargetingEntity>,
}

/// Required fields that were empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Missing required fields for ad set: {}.",
            self.0.join(", ")
        )
    }
}

impl std::error::Error for MissingFields {}

/// Upper-cases country codes and maps `UK` to `GB`
#[must_use]
pub fn normalize_countries(countries: &[String]) -> Vec<String> {
    countries
        .iter()
        .map(|c| {
            let upper = c.trim().to_uppercase();
            if upper == "UK" { "GB".to_string() } else { upper }
        })
        .collect()
}

impl CreateAdSetRequest {
    /// Checks required fields; numeric fields are always considered present.
    ///
    /// # Errors
    ///
    /// Returns the empty required fields, in declaration order.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let strings = [
            ("ad_account_id", &self.ad_account_id),
            ("name", &self.name),
            ("billing_event", &self.billing_event),
            ("optimization_goal", &self.optimization_goal),
            ("bid_strategy", &self.bid_strategy),
            ("status", &self.status),
            ("campaign_id", &self.campaign_id),
        ];
        let mut missing: Vec<&'static str> = Vec::new();
        for (field, value) in strings {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if self.countries.iter().all(|c| c.trim().is_empty()) {
            missing.push("countries");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(missing))
        }
    }

    /// Daily budget raised to [`MIN_DAILY_BUDGET`]
    #[must_use]
    pub fn effective_daily_budget(&self) -> i64 {
        self.daily_budget.max(MIN_DAILY_BUDGET)
    }

    /// Builds the targeting spec from countries, ages, interests and behaviors
    #[must_use]
    pub fn targeting(&self) -> TargetingSpec {
        let flexible = FlexibleSpec {
            interests: (!self.interests.is_empty()).then(|| self.interests.clone()),
            behaviors: (!self.behaviors.is_empty()).then(|| self.behaviors.clone()),
        };
        let has_flexible = flexible.interests.is_some() || flexible.behaviors.is_some();

        TargetingSpec {
            geo_locations: GeoLocations {
                countries: normalize_countries(&self.countries),
            },
            age_min: self.age_min,
            age_max: self.age_max,
            flexible_spec: has_flexible.then(|| vec![flexible]),
        }
    }

    /// Form body for `POST {ad_account_id}/adsets`, without the access token
    ///
    /// # Errors
    ///
    /// Returns an error if the targeting spec cannot be JSON-encoded.
    pub fn form(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let targeting = serde_json::to_string(&self.targeting())?;
        Ok(vec![
            ("name", self.name.clone()),
            ("daily_budget", self.effective_daily_budget().to_string()),
            ("billing_event", self.billing_event.clone()),
            ("optimization_goal", self.optimization_goal.clone()),
            ("bid_strategy", self.bid_strategy.clone()),
            ("status", self.status.clone()),
            ("campaign_id", self.campaign_id.clone()),
            ("targeting", targeting),
        ])
    }
}
