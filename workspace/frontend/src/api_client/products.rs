use crate::api_client;
use common::ProductRecord;

/// Fetch the product catalog. This endpoint returns a bare JSON array, not
/// the `{status, ...}` envelope the other reads use.
pub async fn list_products() -> Result<Vec<ProductRecord>, String> {
    log::trace!("Fetching product catalog");
    let result = api_client::get::<Vec<ProductRecord>>("/new-product-data/").await;
    match &result {
        Ok(products) => log::info!("Fetched {} products", products.len()),
        Err(e) => log::error!("Failed to fetch products: {}", e),
    }
    result
}

/// Create a new product record.
pub async fn create_product(record: &ProductRecord) -> Result<(), String> {
    log::debug!("Creating product: {}", record.product_id);
    let result = api_client::post::<serde_json::Value, _>("/products/", record).await;
    match result {
        Ok(created) => {
            log::info!("Successfully created product {}", record.product_id);
            log::debug!("Create-product response: {}", created);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to create product '{}': {}", record.product_id, e);
            Err(e)
        }
    }
}
