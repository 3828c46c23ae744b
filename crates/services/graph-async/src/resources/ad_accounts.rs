use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    page::FetchRequest,
    types::{
        Record,
        fields::{AD_ACCOUNT_FIELDS, DEFAULT_PAGE_SIZE},
    },
};

/// API resource for the ad accounts of the token's user
pub struct AdAccounts<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> AdAccounts<'c, C> {
    /// Creates a new AdAccounts resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists `me/adaccounts`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_all`].
    pub async fn list(&self) -> Result<Vec<Record>, GraphError> {
        let req = FetchRequest::new("me/adaccounts")
            .fields(AD_ACCOUNT_FIELDS)
            .limit(DEFAULT_PAGE_SIZE);
        self.client.fetch_all(req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the AdAccounts API resource
    #[must_use]
    pub const fn ad_accounts(&self) -> AdAccounts<'_, C> {
        AdAccounts::new(self)
    }
}
