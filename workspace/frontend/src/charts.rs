//! Chart-ready series derived from raw dataset rows.
//!
//! Every function here is pure: no fetching, no state, output a function of
//! the input rows only. Re-running a transform on the same rows yields an
//! identical series, so views can recompute on demand.

use chrono::NaiveDate;
use common::converters::{format_count, format_usd, long_date};
use common::{
    CustomerSales, ForecastPoint, ProductSales, ProfitPoint, QuickInsights, SalesPoint,
    TopCustomer, TopProduct,
};

/// Fill/border color pair for one pie segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieColor {
    pub fill: &'static str,
    pub border: &'static str,
}

/// Fixed pie palette; segment `i` gets `PALETTE[i % PALETTE.len()]`, so the
/// colors wrap when a distribution has more rows than the palette.
pub const PALETTE: [PieColor; 4] = [
    PieColor {
        fill: "rgba(75, 192, 192, 0.5)",
        border: "rgba(75, 192, 192, 1)",
    },
    PieColor {
        fill: "rgba(255, 159, 64, 0.5)",
        border: "rgba(255, 159, 64, 1)",
    },
    PieColor {
        fill: "rgba(255, 99, 132, 0.5)",
        border: "rgba(255, 99, 132, 1)",
    },
    PieColor {
        fill: "rgba(54, 162, 235, 0.5)",
        border: "rgba(54, 162, 235, 1)",
    },
];

/// Date-labeled line series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub labels: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

/// Name-labeled bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Name-labeled distribution with per-segment colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<PieColor>,
}

/// Sales-over-time line: rows sorted by date ascending. The sort is stable,
/// so rows sharing a date keep their original relative order.
pub fn sales_over_time(rows: &[SalesPoint]) -> TimeSeries {
    let mut sorted: Vec<&SalesPoint> = rows.iter().collect();
    sorted.sort_by_key(|row| row.order_date);
    TimeSeries {
        labels: sorted.iter().map(|row| row.order_date).collect(),
        values: sorted.iter().map(|row| row.sales).collect(),
    }
}

/// Profit-over-time line: same shape and ordering rules as sales.
pub fn profit_over_time(rows: &[ProfitPoint]) -> TimeSeries {
    let mut sorted: Vec<&ProfitPoint> = rows.iter().collect();
    sorted.sort_by_key(|row| row.order_date);
    TimeSeries {
        labels: sorted.iter().map(|row| row.order_date).collect(),
        values: sorted.iter().map(|row| row.profit).collect(),
    }
}

/// Sales-by-product bars: rows sorted by product name, lexicographically
/// ascending, stable on ties.
pub fn sales_by_product(rows: &[ProductSales]) -> BarSeries {
    let mut sorted: Vec<&ProductSales> = rows.iter().collect();
    sorted.sort_by(|a, b| a.product_name.cmp(&b.product_name));
    BarSeries {
        labels: sorted.iter().map(|row| row.product_name.clone()).collect(),
        values: sorted.iter().map(|row| row.sales).collect(),
    }
}

/// Sales-by-customer pie: server order is preserved, each segment colored
/// by position in the fixed palette.
pub fn sales_by_customer(rows: &[CustomerSales]) -> PieSeries {
    PieSeries {
        labels: rows.iter().map(|row| row.customer_name.clone()).collect(),
        values: rows.iter().map(|row| row.total_sales).collect(),
        colors: (0..rows.len()).map(|i| PALETTE[i % PALETTE.len()]).collect(),
    }
}

/// Predicted-sales line for the ranged daily forecast. The server emits the
/// range already ordered; that order is kept.
pub fn forecast_series(points: &[ForecastPoint]) -> TimeSeries {
    TimeSeries {
        labels: points.iter().map(|p| p.date).collect(),
        values: points.iter().map(|p| p.predicted_sales).collect(),
    }
}

/// Quick-stat header values, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightCards {
    pub date: String,
    pub total_sales: String,
    pub avg_order_value: String,
    pub total_orders: String,
    pub total_profit: String,
}

pub fn insight_cards(insights: &QuickInsights) -> InsightCards {
    InsightCards {
        date: long_date(insights.date),
        total_sales: format_usd(insights.total_sales),
        avg_order_value: format_usd(insights.avg_order_value),
        total_orders: format_count(insights.total_orders),
        total_profit: format_usd(insights.total_profit),
    }
}

/// Top-N rows arrive pre-sorted descending by total sales; the leader is
/// the first row.
pub fn leading_customer(rows: &[TopCustomer]) -> Option<&TopCustomer> {
    rows.first()
}

pub fn leading_product(rows: &[TopProduct]) -> Option<&TopProduct> {
    rows.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn time_series_labels_are_non_decreasing() {
        let rows = vec![
            SalesPoint { order_date: date(3), sales: 30.0 },
            SalesPoint { order_date: date(1), sales: 10.0 },
            SalesPoint { order_date: date(2), sales: 20.0 },
        ];
        let series = sales_over_time(&rows);
        assert!(series.labels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(series.values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn time_series_transform_is_deterministic() {
        let rows = vec![
            ProfitPoint { order_date: date(2), profit: 5.0 },
            ProfitPoint { order_date: date(1), profit: 3.0 },
        ];
        assert_eq!(profit_over_time(&rows), profit_over_time(&rows));
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let rows = vec![
            SalesPoint { order_date: date(1), sales: 1.0 },
            SalesPoint { order_date: date(1), sales: 2.0 },
            SalesPoint { order_date: date(1), sales: 3.0 },
        ];
        let series = sales_over_time(&rows);
        assert_eq!(series.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn product_bars_sort_lexicographically() {
        let rows = vec![
            ProductSales { product_name: "Stapler".into(), sales: 9.0 },
            ProductSales { product_name: "Binder".into(), sales: 4.0 },
            ProductSales { product_name: "Chair".into(), sales: 7.0 },
        ];
        let series = sales_by_product(&rows);
        assert_eq!(series.labels, vec!["Binder", "Chair", "Stapler"]);
        assert_eq!(series.values, vec![4.0, 7.0, 9.0]);
    }

    #[test]
    fn insight_cards_format_for_display() {
        let insights = QuickInsights {
            date: date(1),
            total_sales: 1500.5,
            avg_order_value: 125.04,
            total_orders: 12,
            total_profit: 300.25,
        };
        let cards = insight_cards(&insights);
        assert_eq!(cards.date, "Friday, March 1, 2024");
        assert_eq!(cards.total_sales, "$1,500.50");
        assert_eq!(cards.avg_order_value, "$125.04");
        assert_eq!(cards.total_orders, "12");
        assert_eq!(cards.total_profit, "$300.25");
    }

    #[test]
    fn leaders_are_the_first_server_rows() {
        let customers = vec![
            TopCustomer { customer_name: "Ann".into(), total_sales: 90.0 },
            TopCustomer { customer_name: "Bob".into(), total_sales: 40.0 },
        ];
        assert_eq!(
            leading_customer(&customers).map(|c| c.customer_name.as_str()),
            Some("Ann")
        );
        assert_eq!(leading_product(&[]), None);
    }

    #[test]
    fn customer_pie_preserves_server_order_and_wraps_palette() {
        let rows: Vec<CustomerSales> = (0..6)
            .map(|i| CustomerSales {
                customer_name: format!("Customer {}", i),
                total_sales: i as f64,
            })
            .collect();
        let series = sales_by_customer(&rows);
        assert_eq!(series.labels[0], "Customer 0");
        assert_eq!(series.colors[0], PALETTE[0]);
        assert_eq!(series.colors[4], PALETTE[0]);
        assert_eq!(series.colors[5], PALETTE[1]);
    }
}
