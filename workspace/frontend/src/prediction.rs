//! Forecast query coordination.
//!
//! Three query slots, one per granularity, each driven independently by the
//! caller supplying a date. A slot only ever mutates itself: a failed weekly
//! query leaves the daily and monthly slots exactly as they were. Requests
//! are not cancelled; the last response to arrive for a slot wins.

use chrono::NaiveDate;

use crate::api_client;

/// Shown for any failed forecast query, regardless of the underlying cause.
pub const FAILURE_MESSAGE: &str = "Failed to fetch prediction";

/// Forecast granularity, one per query slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Week, Granularity::Month];

    pub fn endpoint(&self) -> &'static str {
        match self {
            Granularity::Day => "/predict-daily-sales/",
            Granularity::Week => "/predict-weekly-sales/",
            Granularity::Month => "/predict-monthly-sales/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "daily",
            Granularity::Week => "weekly",
            Granularity::Month => "monthly",
        }
    }

    fn index(&self) -> usize {
        match self {
            Granularity::Day => 0,
            Granularity::Week => 1,
            Granularity::Month => 2,
        }
    }
}

/// Outcome of one slot's latest query. A completed query holds exactly one
/// of a prediction or an error, never both.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlotState {
    /// No query issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Last query succeeded.
    Predicted(f64),
    /// Last query failed.
    Failed(String),
}

/// One forecast query slot: the date it was asked about plus its outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionSlot {
    pub date: Option<NaiveDate>,
    pub state: SlotState,
}

impl PredictionSlot {
    pub fn prediction(&self) -> Option<f64> {
        match self.state {
            SlotState::Predicted(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SlotState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == SlotState::Pending
    }
}

/// Holds the three independent forecast slots and applies query outcomes
/// to them. Transport lives in [`run_query`]; the coordinator itself is
/// synchronous so outcomes can be applied to whichever snapshot is current
/// when a response lands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionRequestCoordinator {
    slots: [PredictionSlot; 3],
}

impl PredictionRequestCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, granularity: Granularity) -> &PredictionSlot {
        &self.slots[granularity.index()]
    }

    /// Mark one slot pending for a new query date. Other slots are untouched.
    pub fn begin(&mut self, granularity: Granularity, date: NaiveDate) {
        self.slots[granularity.index()] = PredictionSlot {
            date: Some(date),
            state: SlotState::Pending,
        };
    }

    /// Store a successful prediction, clearing any prior error in that slot.
    pub fn apply_success(&mut self, granularity: Granularity, predicted_sales: f64) {
        self.slots[granularity.index()].state = SlotState::Predicted(predicted_sales);
    }

    /// Store the generic failure message, clearing any prior value in that
    /// slot. Error details stay in the log only.
    pub fn apply_failure(&mut self, granularity: Granularity) {
        self.slots[granularity.index()].state = SlotState::Failed(FAILURE_MESSAGE.to_string());
    }
}

/// The only local validation before a query is issued: the date must be
/// present and well formed.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate, String> {
    if raw.trim().is_empty() {
        return Err("A date is required".to_string());
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", raw, e))
}

/// Issue one forecast query and report the outcome for the caller to apply
/// via [`PredictionRequestCoordinator::apply_success`] / `apply_failure`.
pub async fn run_query(granularity: Granularity, date: NaiveDate) -> Result<f64, String> {
    api_client::prediction::predict(granularity, date).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn slots_never_interact() {
        let mut coordinator = PredictionRequestCoordinator::new();
        coordinator.begin(Granularity::Day, date(1));
        coordinator.apply_failure(Granularity::Day);
        coordinator.begin(Granularity::Week, date(4));
        coordinator.apply_success(Granularity::Week, 9321.00);

        assert_eq!(
            coordinator.slot(Granularity::Day).error(),
            Some(FAILURE_MESSAGE)
        );
        assert_eq!(coordinator.slot(Granularity::Week).prediction(), Some(9321.00));
        assert_eq!(coordinator.slot(Granularity::Month).state, SlotState::Idle);
    }

    #[test]
    fn success_clears_prior_error() {
        let mut coordinator = PredictionRequestCoordinator::new();
        coordinator.begin(Granularity::Month, date(1));
        coordinator.apply_failure(Granularity::Month);
        coordinator.begin(Granularity::Month, date(2));
        coordinator.apply_success(Granularity::Month, 120.5);

        let slot = coordinator.slot(Granularity::Month);
        assert_eq!(slot.error(), None);
        assert_eq!(slot.prediction(), Some(120.5));
        assert_eq!(slot.date, Some(date(2)));
    }

    #[test]
    fn failure_clears_prior_value_with_generic_message() {
        let mut coordinator = PredictionRequestCoordinator::new();
        coordinator.begin(Granularity::Day, date(1));
        coordinator.apply_success(Granularity::Day, 42.0);
        coordinator.begin(Granularity::Day, date(2));
        coordinator.apply_failure(Granularity::Day);

        let slot = coordinator.slot(Granularity::Day);
        assert_eq!(slot.prediction(), None);
        assert_eq!(slot.error(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn pending_holds_neither_value_nor_error() {
        let mut coordinator = PredictionRequestCoordinator::new();
        coordinator.begin(Granularity::Week, date(4));

        let slot = coordinator.slot(Granularity::Week);
        assert!(slot.is_pending());
        assert_eq!(slot.prediction(), None);
        assert_eq!(slot.error(), None);
    }

    #[test]
    fn query_date_must_be_present() {
        assert!(parse_query_date("").is_err());
        assert!(parse_query_date("  ").is_err());
        assert_eq!(parse_query_date("2024-03-01"), Ok(date(1)));
    }
}
