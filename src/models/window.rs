use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One 14-day pay cycle. `cycle_index` counts cycles since the anchor
/// date (negative before it). The end boundary is exclusive: an event
/// exactly at `end_instant_exclusive` belongs to the next window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub start_local: NaiveDate,
    pub end_local_exclusive: NaiveDate,
    pub start_instant: DateTime<Utc>,
    pub end_instant_exclusive: DateTime<Utc>,
    pub cycle_index: i64,
}

impl DayWindow {
    pub fn start_key(&self) -> String {
        self.start_local.format("%Y-%m-%d").to_string()
    }

    pub fn end_key_exclusive(&self) -> String {
        self.end_local_exclusive.format("%Y-%m-%d").to_string()
    }

    pub fn label(&self) -> String {
        format!("{} → {}", self.start_key(), self.end_key_exclusive())
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_instant <= instant && instant < self.end_instant_exclusive
    }
}
