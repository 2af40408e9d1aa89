use crate::api_client;
use common::{InsightsEnvelope, QuickInsights};

/// Fetch the aggregated quick stats for the most recent trading day.
pub async fn quick_insights() -> Result<QuickInsights, String> {
    log::trace!("Fetching quick insights");
    let result = api_client::get_enveloped::<InsightsEnvelope>("/quick-insights/")
        .await
        .and_then(InsightsEnvelope::into_data);

    match &result {
        Ok(data) => log::info!("Fetched quick insights for {}", data.date),
        Err(e) => log::error!("Failed to fetch quick insights: {}", e),
    }
    result
}
