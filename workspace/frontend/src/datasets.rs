//! Per-dataset fetch state.
//!
//! Every remote collection the dashboard shows lives in its own
//! [`DatasetSlot`]: one slot per dataset, mutated only by its own fetch.
//! Failures are recorded in the owning slot and never touch other slots,
//! and a failed refresh keeps the previously fetched rows around so the
//! view can keep rendering them next to the error marker.

use chrono::{DateTime, Utc};

/// Rows from exactly one completed fetch. A later fetch fully replaces
/// this value; rows are never merged across fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetResult<T> {
    pub rows: Vec<T>,
    pub fetched_at: DateTime<Utc>,
}

/// Lifecycle of one dataset slot.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSlot<T> {
    /// Never fetched.
    Idle,
    /// Fetch in flight; `prior` holds the last successful result, if any.
    Loading { prior: Option<DatasetResult<T>> },
    /// Last fetch succeeded.
    Ready(DatasetResult<T>),
    /// Last fetch failed; `prior` still holds the last successful result.
    Failed {
        error: String,
        prior: Option<DatasetResult<T>>,
    },
}

impl<T> Default for DatasetSlot<T> {
    fn default() -> Self {
        DatasetSlot::Idle
    }
}

impl<T> DatasetSlot<T> {
    /// Start a fetch, carrying the last successful rows through the
    /// loading phase.
    pub fn begin(self) -> Self {
        DatasetSlot::Loading {
            prior: self.into_last_success(),
        }
    }

    /// Complete a fetch: the new rows fully replace whatever was held.
    pub fn resolve(self, rows: Vec<T>) -> Self {
        self.resolve_at(rows, Utc::now())
    }

    /// `resolve` with an explicit timestamp.
    pub fn resolve_at(self, rows: Vec<T>, fetched_at: DateTime<Utc>) -> Self {
        DatasetSlot::Ready(DatasetResult { rows, fetched_at })
    }

    /// Record a failure without discarding previously successful rows.
    pub fn reject(self, error: String) -> Self {
        DatasetSlot::Failed {
            error,
            prior: self.into_last_success(),
        }
    }

    /// Rows currently available for display, whether from the latest fetch
    /// or retained from before a failure.
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            DatasetSlot::Idle => None,
            DatasetSlot::Loading { prior } | DatasetSlot::Failed { prior, .. } => {
                prior.as_ref().map(|r| r.rows.as_slice())
            }
            DatasetSlot::Ready(result) => Some(&result.rows),
        }
    }

    /// The isolated error marker, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            DatasetSlot::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DatasetSlot::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DatasetSlot::Ready(_))
    }

    fn into_last_success(self) -> Option<DatasetResult<T>> {
        match self {
            DatasetSlot::Idle => None,
            DatasetSlot::Loading { prior } | DatasetSlot::Failed { prior, .. } => prior,
            DatasetSlot::Ready(result) => Some(result),
        }
    }
}
