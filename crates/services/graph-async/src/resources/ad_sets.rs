use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    page::FetchRequest,
    types::{
        CreateAdSetRequest, CreatedObject, DeleteResponse, Record,
        fields::{AD_SET_FIELDS, DEFAULT_PAGE_SIZE},
    },
};

/// API resource for ad sets
pub struct AdSets<'c, C: Config> {
    client: &'c Client<C>,
}

/// `filtering` parameter restricting ad sets to one campaign
#[must_use]
pub fn campaign_filter(campaign_id: &str) -> String {
    serde_json::json!([{
        "field": "campaign.id",
        "operator": "IN",
        "value": [campaign_id],
    }])
    .to_string()
}

impl<'c, C: Config> AdSets<'c, C> {
    /// Creates a new AdSets resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists ad sets of an ad account, optionally only those of one campaign
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_all`].
    pub async fn list(
        &self,
        ad_account_id: &str,
        campaign_id: Option<&str>,
    ) -> Result<Vec<Record>, GraphError> {
        let mut req = FetchRequest::new(format!("{ad_account_id}/adsets"))
            .fields(AD_SET_FIELDS)
            .limit(DEFAULT_PAGE_SIZE);
        if let Some(campaign_id) = campaign_id.filter(|c| !c.trim().is_empty()) {
            req = req.param("filtering", campaign_filter(campaign_id));
        }
        self.client.fetch_all(req).await
    }

    /// Creates an ad set; the request is expected to be validated already
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, req: &CreateAdSetRequest) -> Result<CreatedObject, GraphError> {
        let form = req
            .form()
            .map_err(|e| GraphError::Decode(format!("targeting spec: {e}")))?;
        self.client
            .post_form(&format!("{}/adsets", req.ad_account_id), &form)
            .await
    }

    /// Deletes an ad set by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, ad_set_id: &str) -> Result<DeleteResponse, GraphError> {
        self.client.delete(ad_set_id).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the AdSets API resource
    #[must_use]
    pub const fn ad_sets(&self) -> AdSets<'_, C> {
        AdSets::new(self)
    }
}
