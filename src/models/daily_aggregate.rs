use chrono::{DateTime, Utc};
use serde::Serialize;

/// Anomaly flags for a day with incomplete action pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anomaly {
    MissingEntry,
    MissingExit,
    LunchStartWithoutEnd,
    LunchEndWithoutStart,
}

impl Anomaly {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anomaly::MissingEntry => "MissingEntry",
            Anomaly::MissingExit => "MissingExit",
            Anomaly::LunchStartWithoutEnd => "LunchStartWithoutEnd",
            Anomaly::LunchEndWithoutStart => "LunchEndWithoutStart",
        }
    }
}

/// One user's reduced view of one civil day: earliest occurrence of each
/// action, worked minutes (Entry→Exit span, lunch not deducted), and
/// anomaly flags.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAggregate {
    pub user_key: String,
    pub user_name: String,
    pub day_key: String,
    pub entry_at: Option<DateTime<Utc>>,
    pub lunch_start_at: Option<DateTime<Utc>>,
    pub lunch_end_at: Option<DateTime<Utc>>,
    pub exit_at: Option<DateTime<Utc>>,
    pub minutes_worked: i64,
    pub anomalies: Vec<Anomaly>,
}

impl DailyAggregate {
    pub fn is_complete(&self) -> bool {
        self.entry_at.is_some() && self.exit_at.is_some()
    }
}
