use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    page::FetchRequest,
    types::{
        Record,
        fields::{CAMPAIGN_FIELDS, DEFAULT_PAGE_SIZE},
    },
};

/// API resource for campaigns
pub struct Campaigns<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Campaigns<'c, C> {
    /// Creates a new Campaigns resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists campaigns of an ad account
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_all`].
    pub async fn list(&self, ad_account_id: &str) -> Result<Vec<Record>, GraphError> {
        let req = FetchRequest::new(format!("{ad_account_id}/campaigns"))
            .fields(CAMPAIGN_FIELDS)
            .limit(DEFAULT_PAGE_SIZE);
        self.client.fetch_all(req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Campaigns API resource
    #[must_use]
    pub const fn campaigns(&self) -> Campaigns<'_, C> {
        Campaigns::new(self)
    }
}
