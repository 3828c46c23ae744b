use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    types::{Interest, Page},
};

/// API resource for the targeting `search` endpoint
pub struct Search<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Search<'c, C> {
    /// Creates a new Search resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Searches interest targeting options by keyword; reads a single page
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn interests(&self, query: &str, limit: u32) -> Result<Vec<Interest>, GraphError> {
        let params = [
            ("type".to_string(), "adinterest".to_string()),
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        let page: Page<Interest> = self.client.get("search", &params).await?;
        Ok(page.data)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Search API resource
    #[must_use]
    pub const fn search(&self) -> Search<'_, C> {
        Search::new(self)
    }
}
