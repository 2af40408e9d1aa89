use crate::api_client;
use common::NewSaleRequest;

/// Create a new sale record.
pub async fn create_sale(request: &NewSaleRequest) -> Result<(), String> {
    log::debug!("Creating sale record dated {}", request.order_date);
    let result = api_client::post::<serde_json::Value, _>("/sales/", request).await;
    match result {
        Ok(created) => {
            log::info!("Successfully created sale record dated {}", request.order_date);
            log::debug!("Create-sale response: {}", created);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to create sale record: {}", e);
            Err(e)
        }
    }
}
