use crate::{
    client::Client,
    config::Config,
    error::GraphError,
    page::FetchRequest,
    types::{
        DeleteResponse, Record,
        fields::{PRODUCT_FIELDS, PRODUCT_PAGE_SIZE},
    },
};

/// API resource for catalog products
pub struct Products<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Products<'c, C> {
    /// Creates a new Products resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists every product of a catalog across all pages
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_all`].
    pub async fn list(&self, catalog_id: &str) -> Result<Vec<Record>, GraphError> {
        let req = FetchRequest::new(format!("{catalog_id}/products"))
            .fields(PRODUCT_FIELDS)
            .limit(PRODUCT_PAGE_SIZE);
        self.client.fetch_all(req).await
    }

    /// Deletes a product by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, product_id: &str) -> Result<DeleteResponse, GraphError> {
        self.client.delete(product_id).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Products API resource
    #[must_use]
    pub const fn products(&self) -> Products<'_, C> {
        Products::new(self)
    }
}
