use secrecy::{ExposeSecret, SecretString};

/// Default Graph API base URL
pub const GRAPH_DEFAULT_BASE: &str = "https://graph.facebook.com/v21.0";
/// Query parameter carrying the access token
pub const PARAM_ACCESS_TOKEN: &str = "access_token";
/// Default upper bound on followed continuation links
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Configuration for the Graph client
///
/// Debug output automatically redacts `access_token` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GraphConfig {
    api_base: String,
    access_token: Option<SecretString>,
    max_pages: usize,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for GraphConfig {
    fn default() -> Self {
        let access_token = env_trimmed("FB_ACCESS_TOKEN").map(SecretString::from);
        let api_base = env_trimmed("FB_BASE_URL").unwrap_or_else(|| GRAPH_DEFAULT_BASE.into());
        let max_pages = env_trimmed("FB_MAX_PAGES")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_PAGES);

        Self {
            api_base,
            access_token,
            max_pages,
        }
    }
}

impl GraphConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `FB_ACCESS_TOKEN` for the Graph access token
    /// - `FB_BASE_URL` for a custom base URL (defaults to `https://graph.facebook.com/v21.0`)
    /// - `FB_MAX_PAGES` for the continuation cap (defaults to 1000)
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

    /// Sets the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Sets the maximum number of pages a single fetch may read
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the continuation cap
    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }
}

/// Configuration trait for the Graph client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Constructs the full URL for an API path
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in every first-page request
    fn query(&self) -> Vec<(&str, &str)>;

    /// Upper bound on pages read by one fetch
    fn max_pages(&self) -> usize;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::GraphError>;
}

impl Config for GraphConfig {
    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        self.access_token
            .as_ref()
            .map(|secret| secret.expose_secret().trim())
            .filter(|token| !token.is_empty())
            .map(|token| vec![(PARAM_ACCESS_TOKEN, token)])
            .unwrap_or_default()
    }

    fn max_pages(&self) -> usize {
        self.max_pages
    }

    fn validate_auth(&self) -> Result<(), crate::error::GraphError> {
        match &self.access_token {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::GraphError::Config(
                "Missing Graph credentials: set FB_ACCESS_TOKEN environment variable".into(),
            )),
        }
    }
}
