use crate::{client::Client, error::WeatherError, types::CurrentWeather};

/// Units requested from upstream; temperatures come back in Celsius
pub const UNITS: &str = "metric";

/// API resource for current conditions
pub struct Current<'c> {
    client: &'c Client,
}

impl<'c> Current<'c> {
    /// Creates a new Current resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Current weather for a city name, e.g. `"London"` or `"London,uk"`
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Status`] on a non-200 answer (404 for unknown cities),
    /// and a transport, decode or config error otherwise.
    pub async fn by_city(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.client
            .get("weather", &[("q", city), ("units", UNITS)])
            .await
    }
}

impl Client {
    /// Returns the Current weather API resource
    #[must_use]
    pub const fn current(&self) -> Current<'_> {
        Current::new(self)
    }
}
