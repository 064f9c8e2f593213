//! Daily aggregation: fold raw clock events into one row per
//! (user, local day).
//!
//! The gate should have prevented duplicates at write time, but the
//! reduction is defensive anyway: for each action only the earliest
//! occurrence counts, so re-aggregating a superset with late
//! duplicates yields the same rows.

use crate::core::zone::ZoneClock;
use crate::models::action::ClockAction;
use crate::models::clock_event::ClockEvent;
use crate::models::daily_aggregate::{Anomaly, DailyAggregate};
use crate::utils::time::minutes_between;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Default)]
struct Slots {
    user_name: String,
    entry_at: Option<DateTime<Utc>>,
    lunch_start_at: Option<DateTime<Utc>>,
    lunch_end_at: Option<DateTime<Utc>>,
    exit_at: Option<DateTime<Utc>>,
}

fn keep_earliest(slot: &mut Option<DateTime<Utc>>, candidate: DateTime<Utc>) {
    match slot {
        Some(existing) if *existing <= candidate => {}
        _ => *slot = Some(candidate),
    }
}

/// Reduce `events` (any order) to one `DailyAggregate` per
/// (user_key, local day). Day keys are derived from `occurred_at` in
/// the configured zone. Output is ordered by day key descending, then
/// user key ascending; deterministic for pagination and tests.
pub fn aggregate_daily(events: &[ClockEvent], clock: &ZoneClock) -> Vec<DailyAggregate> {
    // Map-keyed grouping: one pass over the events.
    let mut groups: HashMap<(String, String), Slots> = HashMap::new();

    for ev in events {
        if ev.user_key.is_empty() {
            continue;
        }
        let day_key = clock.local_day_key(ev.occurred_at);
        let slots = groups
            .entry((ev.user_key.clone(), day_key))
            .or_default();

        if slots.user_name.is_empty() && !ev.user_name.is_empty() {
            slots.user_name = ev.user_name.clone();
        }

        let slot = match ev.action {
            ClockAction::Entry => &mut slots.entry_at,
            ClockAction::LunchStart => &mut slots.lunch_start_at,
            ClockAction::LunchEnd => &mut slots.lunch_end_at,
            ClockAction::Exit => &mut slots.exit_at,
        };
        keep_earliest(slot, ev.occurred_at);
    }

    let mut rows: Vec<DailyAggregate> = groups
        .into_iter()
        .map(|((user_key, day_key), slots)| {
            let minutes_worked = match (slots.entry_at, slots.exit_at) {
                (Some(entry), Some(exit)) => minutes_between(entry, exit),
                _ => 0,
            };

            let mut anomalies = Vec::new();
            if slots.entry_at.is_none() {
                anomalies.push(Anomaly::MissingEntry);
            }
            if slots.exit_at.is_none() {
                anomalies.push(Anomaly::MissingExit);
            }
            if slots.lunch_start_at.is_some() && slots.lunch_end_at.is_none() {
                anomalies.push(Anomaly::LunchStartWithoutEnd);
            }
            if slots.lunch_end_at.is_some() && slots.lunch_start_at.is_none() {
                anomalies.push(Anomaly::LunchEndWithoutStart);
            }

            let user_name = if slots.user_name.is_empty() {
                user_key.clone()
            } else {
                slots.user_name
            };

            DailyAggregate {
                user_key,
                user_name,
                day_key,
                entry_at: slots.entry_at,
                lunch_start_at: slots.lunch_start_at,
                lunch_end_at: slots.lunch_end_at,
                exit_at: slots.exit_at,
                minutes_worked,
                anomalies,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.day_key
            .cmp(&a.day_key)
            .then_with(|| a.user_key.cmp(&b.user_key))
    });
    rows
}
