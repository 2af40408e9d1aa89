use crate::api_client;
use crate::prediction::Granularity;
use chrono::NaiveDate;
use common::{ForecastEnvelope, ForecastPoint, PredictRequest, PredictionEnvelope};

/// Request a single forecast value from the slot's endpoint.
pub async fn predict(granularity: Granularity, date: NaiveDate) -> Result<f64, String> {
    log::trace!("Requesting {} prediction for {}", granularity.label(), date);
    let body = PredictRequest { date };
    let result = api_client::post::<PredictionEnvelope, _>(granularity.endpoint(), &body)
        .await
        .and_then(PredictionEnvelope::into_prediction);
    match &result {
        Ok(value) => log::info!(
            "{} prediction for {}: {}",
            granularity.label(),
            date,
            value
        ),
        Err(e) => log::error!("{} prediction failed: {}", granularity.label(), e),
    }
    result
}

/// Fetch the ranged daily forecast ending at `date` (30 days of points).
pub async fn daily_forecast(date: NaiveDate) -> Result<Vec<ForecastPoint>, String> {
    log::trace!("Fetching daily forecast range ending {}", date);
    let endpoint = format!("/daily-sales-prediction/?date={}", date);
    let result = api_client::get_enveloped::<ForecastEnvelope>(&endpoint)
        .await
        .and_then(ForecastEnvelope::into_points);
    match &result {
        Ok(points) => log::info!("Fetched {} forecast points", points.len()),
        Err(e) => log::error!("Failed to fetch daily forecast: {}", e),
    }
    result
}
