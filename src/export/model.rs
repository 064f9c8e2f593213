// src/export/model.rs

use crate::models::daily_aggregate::DailyAggregate;
use crate::utils::time::minutes_to_hours;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Flat per-day row for export.
#[derive(Serialize, Clone, Debug)]
pub struct DailyRowExport {
    pub user: String,
    pub email: String,
    pub day: String,
    pub entry_utc: String,
    pub lunch_start_utc: String,
    pub lunch_end_utc: String,
    pub exit_utc: String,
    pub minutes: i64,
    pub hours: String,
    pub anomalies: String,
}

fn iso_or_empty(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

impl DailyRowExport {
    pub fn from_aggregate(agg: &DailyAggregate) -> Self {
        Self {
            user: agg.user_name.clone(),
            email: agg.user_key.clone(),
            day: agg.day_key.clone(),
            entry_utc: iso_or_empty(agg.entry_at),
            lunch_start_utc: iso_or_empty(agg.lunch_start_at),
            lunch_end_utc: iso_or_empty(agg.lunch_end_at),
            exit_utc: iso_or_empty(agg.exit_at),
            minutes: agg.minutes_worked,
            hours: minutes_to_hours(agg.minutes_worked),
            anomalies: agg
                .anomalies
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Header for CSV export.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "User",
        "Email",
        "Day",
        "Entry(UTC)",
        "LunchStart(UTC)",
        "LunchEnd(UTC)",
        "Exit(UTC)",
        "Minutes",
        "Hours",
        "Anomalies",
    ]
}

pub(crate) fn row_to_record(r: &DailyRowExport) -> Vec<String> {
    vec![
        r.user.clone(),
        r.email.clone(),
        r.day.clone(),
        r.entry_utc.clone(),
        r.lunch_start_utc.clone(),
        r.lunch_end_utc.clone(),
        r.exit_utc.clone(),
        r.minutes.to_string(),
        r.hours.clone(),
        r.anomalies.clone(),
    ]
}
