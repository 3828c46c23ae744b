#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async OpenWeatherMap client for current conditions by city name.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::WeatherConfig;
pub use crate::error::WeatherError;
pub use crate::types::CurrentWeather;
