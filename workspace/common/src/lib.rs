//! Common transport-layer types shared across the SalesSage client.
//! These structs mirror the remote API's request/response payloads so the
//! data layer can deserialize responses without duplicating shapes per view.

pub mod converters;
pub mod taxonomy;

pub use taxonomy::{Category, REGIONS, SEGMENTS};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Envelope status value the backend sends on every successful read.
pub const STATUS_SUCCESS: &str = "success";

// ===================== Envelopes =====================

/// The `{status, ...}` wrapper carried by most read endpoints. Row-bearing
/// endpoints put their rows under a `sales` key regardless of row type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsEnvelope<T> {
    pub status: String,
    #[serde(default = "Vec::new")]
    pub sales: Vec<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> RowsEnvelope<T> {
    /// Unwrap the envelope: rows on `status == "success"`, otherwise the
    /// server's message (or the raw status when no message was sent).
    pub fn into_rows(self) -> Result<Vec<T>, String> {
        if self.status == STATUS_SUCCESS {
            Ok(self.sales)
        } else {
            Err(self.message.unwrap_or(self.status))
        }
    }
}

/// Envelope for the quick-insights endpoint, which nests a single record
/// under `data` instead of a `sales` row list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<QuickInsights>,
    #[serde(default)]
    pub message: Option<String>,
}

impl InsightsEnvelope {
    pub fn into_data(self) -> Result<QuickInsights, String> {
        if self.status != STATUS_SUCCESS {
            return Err(self.message.unwrap_or(self.status));
        }
        self.data
            .ok_or_else(|| "quick insights response carried no data".to_string())
    }
}

// ===================== Dashboard datasets =====================

/// Aggregated stats for the most recent trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickInsights {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub avg_order_value: f64,
    pub total_orders: u64,
    pub total_profit: f64,
}

/// One day of aggregated sales (sales-data endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub order_date: NaiveDate,
    pub sales: f64,
}

/// One day of aggregated profit (profit-data endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub order_date: NaiveDate,
    pub profit: f64,
}

/// Total sales per product (product-data endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_name: String,
    pub sales: f64,
}

/// Total sales per customer (customer-data endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSales {
    pub customer_name: String,
    pub total_sales: f64,
}

/// Top-customers rows, pre-sorted by the server in descending sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub customer_name: String,
    pub total_sales: f64,
}

/// Top-products rows, pre-sorted by the server in descending sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_name: String,
    pub total_sales: f64,
}

// ===================== Sales entry =====================

/// Request body for creating a sale record (mirrors the write endpoint).
/// The trailing aggregate fields are accepted by the backend but always
/// submitted as zero from the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSaleRequest {
    pub order_date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    pub segment: String,
    pub country: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub region: String,
    pub product_id: String,
    pub category: String,
    pub sub_category: String,
    pub product_name: String,
    pub sales: f64,
    pub quantity: i64,
    pub discount: f64,
    pub profit: f64,
    pub avg_for_week: f64,
    pub avg_for_month: f64,
    pub week_sales: f64,
    pub month_sales: f64,
    pub day_sales: f64,
}

// ===================== Products =====================

/// Product catalog record. The same shape is sent when creating a product;
/// the backend serializes `price` as a fixed two-decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub sub_category: String,
    pub price: String,
    pub stock_level: i64,
}

// ===================== Predictions =====================

/// Body for the three forecast write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub date: NaiveDate,
}

/// Response of predict-daily/weekly/monthly-sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub predicted_sales: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PredictionEnvelope {
    pub fn into_prediction(self) -> Result<f64, String> {
        match (self.status.as_deref(), self.predicted_sales) {
            (Some(STATUS_SUCCESS), Some(value)) => Ok(value),
            _ => Err(self
                .message
                .unwrap_or_else(|| "prediction response carried no value".to_string())),
        }
    }
}

/// One point of the ranged daily forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_sales: f64,
}

/// Response of daily-sales-prediction. This endpoint predates the `{status}`
/// envelope and reports failures under an `error` key instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEnvelope {
    #[serde(default)]
    pub sales_data: Option<Vec<ForecastPoint>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ForecastEnvelope {
    pub fn into_points(self) -> Result<Vec<ForecastPoint>, String> {
        match (self.sales_data, self.error) {
            (Some(points), _) => Ok(points),
            (None, Some(error)) => Err(error),
            (None, None) => Err("no sales data available".to_string()),
        }
    }
}

// ===================== Auth =====================

/// Body for auth login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for auth register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Profile record returned (and persisted) alongside the session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Successful auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Error payload of a failed login/register; the server's message is shown
/// to the user unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_envelope_unwraps_success() {
        let json = r#"{"status":"success","sales":[{"order_date":"2024-03-01","sales":12.5}]}"#;
        let envelope: RowsEnvelope<SalesPoint> = serde_json::from_str(json).unwrap();
        let rows = envelope.into_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sales, 12.5);
    }

    #[test]
    fn rows_envelope_surfaces_server_message() {
        let json = r#"{"status":"error","message":"database unavailable"}"#;
        let envelope: RowsEnvelope<SalesPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_rows().unwrap_err(), "database unavailable");
    }

    #[test]
    fn rows_envelope_falls_back_to_status_text() {
        let json = r#"{"status":"error"}"#;
        let envelope: RowsEnvelope<SalesPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_rows().unwrap_err(), "error");
    }

    #[test]
    fn insights_envelope_round_trip() {
        let json = r#"{"status":"success","data":{"date":"2024-03-01","total_sales":1500.5,"avg_order_value":125.04,"total_orders":12,"total_profit":300.25}}"#;
        let envelope: InsightsEnvelope = serde_json::from_str(json).unwrap();
        let data = envelope.into_data().unwrap();
        assert_eq!(data.total_orders, 12);
        assert_eq!(data.total_sales, 1500.5);
    }

    #[test]
    fn insights_envelope_rejects_missing_data() {
        let json = r#"{"status":"success"}"#;
        let envelope: InsightsEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn prediction_envelope_success() {
        let json = r#"{"status":"success","date":"2024-03-04","predicted_sales":9321.0}"#;
        let envelope: PredictionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_prediction().unwrap(), 9321.0);
    }

    #[test]
    fn prediction_envelope_error_message() {
        let json = r#"{"status":"error","message":"Date must be in the future"}"#;
        let envelope: PredictionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_prediction().unwrap_err(),
            "Date must be in the future"
        );
    }

    #[test]
    fn forecast_envelope_reports_error_without_points() {
        let json = r#"{"error":"No date provided"}"#;
        let envelope: ForecastEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_points().unwrap_err(), "No date provided");
    }

    #[test]
    fn sale_request_serializes_snake_case_fields() {
        let request = NewSaleRequest {
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            customer_id: "C-1".into(),
            customer_name: "Ada".into(),
            segment: "Consumer".into(),
            country: "USA".into(),
            city: "Austin".into(),
            state: "TX".into(),
            postal_code: "73301".into(),
            region: "Central".into(),
            product_id: "P-1".into(),
            category: "Furniture".into(),
            sub_category: "Chairs".into(),
            product_name: "Desk Chair".into(),
            sales: 199.99,
            quantity: 2,
            discount: 0.1,
            profit: 40.0,
            avg_for_week: 0.0,
            avg_for_month: 0.0,
            week_sales: 0.0,
            month_sales: 0.0,
            day_sales: 0.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["order_date"], "2024-03-01");
        assert_eq!(value["sub_category"], "Chairs");
        assert_eq!(value["quantity"], 2);
    }
}
