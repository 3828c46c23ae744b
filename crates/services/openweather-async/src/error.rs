use thiserror::Error;

/// Errors that can occur when using the weather client
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[source] reqwest::Error),

    /// Non-200 status; upstream answers 404 for unknown cities
    #[error("API error ({status})")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl WeatherError {
    /// HTTP status of a [`WeatherError::Status`] failure
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The request URL is dropped: it carries `appid` in its query string.
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        Self::Reqwest(e.without_url())
    }
}

/// Maps a serde deserialization error to a `WeatherError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> WeatherError {
    let text = String::from_utf8_lossy(body);
    let snippet: String = text.chars().take(400).collect();
    WeatherError::Serde(format!("{e}: {snippet}"))
}
