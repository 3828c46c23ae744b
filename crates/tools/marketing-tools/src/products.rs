//! Catalog product tools.

use crate::MarketingTools;
use crate::envelope::Envelope;
use crate::types::{CatalogProductsInput, DeleteProductInput};

/// Message attached to an empty product envelope
pub const NO_PRODUCTS: &str = "No products found in this catalog.";

/// Fetch every product of a catalog and wrap them in an envelope.
pub async fn fetch_products_from_catalog(
    tools: &MarketingTools,
    input: CatalogProductsInput,
) -> String {
    let result = tools.graph.products().list(&input.catalog_id).await;
    if let Ok(records) = &result {
        tracing::debug!(catalog_id = %input.catalog_id, count = records.len(), "fetched products");
    }
    Envelope::from_fetch(&result, NO_PRODUCTS).to_json()
}

/// Delete one product.
pub async fn delete_catalog_product(tools: &MarketingTools, input: DeleteProductInput) -> String {
    match tools.graph.products().delete(&input.product_id).await {
        Ok(resp) if resp.success => format!("Product {} deleted successfully.", input.product_id),
        Ok(_) => "Product deletion request was received but not confirmed.".to_string(),
        Err(e) => format!("Error deleting product: {e}"),
    }
}
