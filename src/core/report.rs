//! Bi-weekly window reports: daily rows plus per-user totals.

use crate::core::aggregate::aggregate_daily;
use crate::core::zone::ZoneClock;
use crate::models::clock_event::ClockEvent;
use crate::models::daily_aggregate::DailyAggregate;
use crate::models::window::DayWindow;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct UserTotals {
    pub user_key: String,
    pub user_name: String,
    pub minutes: i64,
    /// Days with both an entry and an exit recorded.
    pub days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowReport {
    pub window: DayWindow,
    pub daily: Vec<DailyAggregate>,
    pub totals: Vec<UserTotals>,
}

/// Build the report for one window over an already-fetched event set.
///
/// A non-admin caller's event set must already be restricted to
/// `caller_user_key` by the caller; authorization is not re-checked
/// here. The text filter (case-insensitive substring on user key or
/// display name) applies only to admin callers.
pub fn build_report(
    window: DayWindow,
    events: &[ClockEvent],
    caller_is_admin: bool,
    _caller_user_key: &str,
    text_filter: Option<&str>,
    clock: &ZoneClock,
) -> WindowReport {
    let filter = text_filter
        .map(str::trim)
        .filter(|q| !q.is_empty() && caller_is_admin)
        .map(str::to_lowercase);

    let filtered: Vec<ClockEvent> = match &filter {
        Some(q) => events
            .iter()
            .filter(|ev| {
                ev.user_key.to_lowercase().contains(q)
                    || ev.user_name.to_lowercase().contains(q)
            })
            .cloned()
            .collect(),
        None => events.to_vec(),
    };

    let daily = aggregate_daily(&filtered, clock);

    let mut by_user: HashMap<String, UserTotals> = HashMap::new();
    for row in &daily {
        let totals = by_user
            .entry(row.user_key.clone())
            .or_insert_with(|| UserTotals {
                user_key: row.user_key.clone(),
                user_name: row.user_name.clone(),
                minutes: 0,
                days: 0,
            });
        totals.minutes += row.minutes_worked;
        if row.is_complete() {
            totals.days += 1;
        }
    }

    let mut totals: Vec<UserTotals> = by_user.into_values().collect();
    totals.sort_by(|a, b| a.user_key.cmp(&b.user_key));

    WindowReport {
        window,
        daily,
        totals,
    }
}
