//! Time utilities: span computations and minute formatting.

use chrono::{DateTime, Utc};

/// Minutes between two instants, rounded to the nearest minute and
/// clamped at zero (clock skew must never produce negative spans).
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let secs = (end - start).num_seconds();
    if secs <= 0 {
        return 0;
    }
    (secs + 30) / 60
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn minutes_to_hours(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}
