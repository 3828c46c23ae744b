//! Current weather response

use serde::{Deserialize, Serialize};

/// Subset of the `/weather` response used for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Resolved city name
    pub name: String,
    /// Temperature and humidity
    pub main: MainReadings,
    /// Weather conditions; the first one is the primary
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Wind readings
    pub wind: Wind,
}

/// `main` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in the requested units
    pub temp: f64,
    /// Relative humidity, percent
    pub humidity: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition group, e.g. `Rain`
    #[serde(default)]
    pub main: Option<String>,
    /// Human-readable description, e.g. `light rain`
    pub description: String,
}

/// `wind` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in the requested units
    pub speed: f64,
}

impl CurrentWeather {
    /// Description of the primary condition
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}
