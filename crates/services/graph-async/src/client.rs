use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{self, GraphError},
    page::{self, FetchRequest},
    types::Record,
};

/// Graph API client
///
/// The client is generic over a [`Config`] implementation that provides the
/// access token, base URL and continuation cap.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::GraphConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables:
    /// - `FB_ACCESS_TOKEN` for the access token
    /// - `FB_BASE_URL` for a custom API base URL
    /// - `FB_MAX_PAGES` for the continuation cap
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::GraphConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Reads every page of a collection, following `paging.next` until it is absent.
    ///
    /// The first request goes to `{base}/{path}` with the access token and the request's
    /// parameters; every later request goes to the continuation link verbatim, since
    /// upstream links already carry the token and cursor.
    ///
    /// # Errors
    ///
    /// Any failure on any page aborts the fetch and discards records read so far:
    /// - [`GraphError::Config`] if no access token is configured
    /// - [`GraphError::Connection`], [`GraphError::Timeout`], [`GraphError::Transport`]
    ///   when no response arrived
    /// - [`GraphError::Http`] on a non-success status
    /// - [`GraphError::Decode`] on an unparseable body
    /// - [`GraphError::Api`] when the body carries an `error` object
    /// - [`GraphError::PageLimit`] when continuation would go past the configured cap
    pub async fn fetch_all(&self, req: FetchRequest) -> Result<Vec<Record>, GraphError> {
        self.config.validate_auth()?;

        let max_pages = self.config.max_pages();
        let mut records = Vec::new();
        let mut pages = 0usize;
        let mut request = self
            .http
            .get(self.config.url(req.path()))
            .query(&self.config.query())
            .query(req.params());

        loop {
            pages += 1;
            let bytes = self.send(request).await.inspect_err(|e| {
                tracing::warn!(path = req.path(), page = pages, error = %e, "page fetch failed");
            })?;
            let parsed = page::parse_page(&bytes)?;
            let next = page::next_link(&parsed).map(str::to_owned);

            tracing::debug!(
                path = req.path(),
                page = pages,
                records = parsed.data.len(),
                has_next = next.is_some(),
                "fetched page"
            );
            records.extend(page::into_records(parsed));

            match next {
                Some(_) if pages >= max_pages => {
                    return Err(GraphError::PageLimit { max_pages });
                }
                Some(url) => request = self.http.get(url),
                None => break,
            }
        }

        Ok(records)
    }

    pub(crate) async fn get<O>(&self, path: &str, params: &[(String, String)]) -> Result<O, GraphError>
    where
        O: DeserializeOwned,
    {
        self.config.validate_auth()?;
        let request = self
            .http
            .get(self.config.url(path))
            .query(&self.config.query())
            .query(params);
        self.execute(request).await
    }

    pub(crate) async fn post_form<O>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<O, GraphError>
    where
        O: DeserializeOwned,
    {
        self.config.validate_auth()?;
        let request = self
            .http
            .post(self.config.url(path))
            .query(&self.config.query())
            .form(form);
        self.execute(request).await
    }

    pub(crate) async fn delete<O>(&self, path: &str) -> Result<O, GraphError>
    where
        O: DeserializeOwned,
    {
        self.config.validate_auth()?;
        let request = self
            .http
            .delete(self.config.url(path))
            .query(&self.config.query());
        self.execute(request).await
    }

    async fn execute<O>(&self, request: reqwest::RequestBuilder) -> Result<O, GraphError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.send(request).await?;
        let value = page::parse_body(&bytes)?;
        serde_json::from_value(value).map_err(|e| error::map_deser(&e, &bytes))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<bytes::Bytes, GraphError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(bytes);
        }

        Err(error::http_error(status, &bytes))
    }
}
