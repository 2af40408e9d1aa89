use crate::api_client;
use common::{
    CustomerSales, ProductSales, ProfitPoint, RowsEnvelope, SalesPoint, TopCustomer, TopProduct,
};

/// Daily aggregated sales for the trailing thirty days.
pub async fn sales_data() -> Result<Vec<SalesPoint>, String> {
    log::trace!("Fetching sales time series");
    let result = api_client::get_enveloped::<RowsEnvelope<SalesPoint>>("/sales-data/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched {} sales points", rows.len()),
        Err(e) => log::error!("Failed to fetch sales data: {}", e),
    }
    result
}

/// Daily aggregated profit for the trailing thirty days.
pub async fn profit_data() -> Result<Vec<ProfitPoint>, String> {
    log::trace!("Fetching profit time series");
    let result = api_client::get_enveloped::<RowsEnvelope<ProfitPoint>>("/profit-data/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched {} profit points", rows.len()),
        Err(e) => log::error!("Failed to fetch profit data: {}", e),
    }
    result
}

/// Total sales per product.
pub async fn sales_by_product() -> Result<Vec<ProductSales>, String> {
    log::trace!("Fetching sales by product");
    let result = api_client::get_enveloped::<RowsEnvelope<ProductSales>>("/product-data/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched sales for {} products", rows.len()),
        Err(e) => log::error!("Failed to fetch sales by product: {}", e),
    }
    result
}

/// Total sales per customer.
pub async fn sales_by_customer() -> Result<Vec<CustomerSales>, String> {
    log::trace!("Fetching sales by customer");
    let result = api_client::get_enveloped::<RowsEnvelope<CustomerSales>>("/customer-data/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched sales for {} customers", rows.len()),
        Err(e) => log::error!("Failed to fetch sales by customer: {}", e),
    }
    result
}

/// Customers ranked by total sales, server-sorted descending.
pub async fn top_customers() -> Result<Vec<TopCustomer>, String> {
    log::trace!("Fetching top customers");
    let result = api_client::get_enveloped::<RowsEnvelope<TopCustomer>>("/get-top-customers/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched {} top customers", rows.len()),
        Err(e) => log::error!("Failed to fetch top customers: {}", e),
    }
    result
}

/// Products ranked by total sales, server-sorted descending.
pub async fn top_products() -> Result<Vec<TopProduct>, String> {
    log::trace!("Fetching top products");
    let result = api_client::get_enveloped::<RowsEnvelope<TopProduct>>("/get-top-products/")
        .await
        .and_then(RowsEnvelope::into_rows);
    match &result {
        Ok(rows) => log::info!("Fetched {} top products", rows.len()),
        Err(e) => log::error!("Failed to fetch top products: {}", e),
    }
    result
}
