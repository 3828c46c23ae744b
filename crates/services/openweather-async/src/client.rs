use serde::de::DeserializeOwned;

use crate::{
    config::WeatherConfig,
    error::{self, WeatherError},
};

/// OpenWeatherMap API client
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_config(WeatherConfig::default())
    }
}

impl Client {
    /// Creates a new client from `OPEN_WEATHER_KEY` and `OPEN_WEATHER_BASE_URL`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    pub(crate) async fn get<O>(&self, path: &str, params: &[(&str, &str)]) -> Result<O, WeatherError>
    where
        O: DeserializeOwned,
    {
        let key = self.config.api_key()?;
        let response = self
            .http
            .get(self.config.url(path))
            .query(params)
            .query(&[(crate::config::PARAM_APP_ID, key)])
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| error::map_deser(&e, &bytes));
        }

        tracing::warn!(status = status.as_u16(), path, "weather request failed");
        Err(WeatherError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
