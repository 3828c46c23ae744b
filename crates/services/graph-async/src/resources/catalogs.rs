use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    page::FetchRequest,
    types::{
        Record,
        fields::{CATALOG_FIELDS, DEFAULT_PAGE_SIZE},
    },
};

/// API resource for product catalogs owned by a business
pub struct Catalogs<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Catalogs<'c, C> {
    /// Creates a new Catalogs resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists `{business_id}/owned_product_catalogs`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_all`].
    pub async fn list(&self, business_id: &str) -> Result<Vec<Record>, GraphError> {
        let req = FetchRequest::new(format!("{business_id}/owned_product_catalogs"))
            .fields(CATALOG_FIELDS)
            .limit(DEFAULT_PAGE_SIZE);
        self.client.fetch_all(req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Catalogs API resource
    #[must_use]
    pub const fn catalogs(&self) -> Catalogs<'_, C> {
        Catalogs::new(self)
    }
}
