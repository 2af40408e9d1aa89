//! Converter functions turning raw payload values into display strings.
//!
//! The dashboard shows currency amounts grouped with two decimals
//! (`$1,500.50`) and dates in a long human-readable form. Keeping these
//! conversions here lets the presentation layer render values verbatim.

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, Money};

/// Format a raw amount as US dollars: grouped thousands, two decimals.
///
/// Non-finite amounts cannot be represented and fall back to `$0.00`.
pub fn format_usd(amount: f64) -> String {
    let decimal = match Decimal::from_f64(amount) {
        Some(d) => d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        None => {
            tracing::warn!(amount, "non-finite amount, displaying as zero");
            Decimal::ZERO
        }
    };
    Money::from_decimal(decimal, iso::USD).to_string()
}

/// Format an order/item count with thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Long display form of a date, e.g. "Friday, March 1, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Fixed two-decimal price string, the form the product write endpoint
/// expects for its `price` field.
pub fn fixed_price(amount: f64) -> String {
    if amount.is_finite() {
        format!("{:.2}", amount)
    } else {
        tracing::warn!(amount, "non-finite price, submitting zero");
        "0.00".to_string()
    }
}
