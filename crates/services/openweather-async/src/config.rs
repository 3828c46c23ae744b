use secrecy::{ExposeSecret, SecretString};

/// Default OpenWeatherMap API base URL
pub const WEATHER_DEFAULT_BASE: &str = "http://api.openweathermap.org/data/2.5";
/// Query parameter carrying the API key
pub const PARAM_APP_ID: &str = "appid";

/// Configuration for the weather client
///
/// Debug output redacts the API key via [`SecretString`].
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed("OPEN_WEATHER_BASE_URL")
                .unwrap_or_else(|| WEATHER_DEFAULT_BASE.into()),
            api_key: env_trimmed("OPEN_WEATHER_KEY").map(SecretString::from),
        }
    }
}

impl WeatherConfig {
    /// Reads `OPEN_WEATHER_KEY` and `OPEN_WEATHER_BASE_URL`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL for an API path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// The API key, if one is set and non-blank
    ///
    /// # Errors
    ///
    /// Returns [`crate::WeatherError::Config`] when no key is configured.
    pub fn api_key(&self) -> Result<&str, crate::WeatherError> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                crate::WeatherError::Config(
                    "Missing OpenWeatherMap credentials: set OPEN_WEATHER_KEY environment variable"
                        .into(),
                )
            })
    }
}
