use chrono::{DateTime, TimeZone, Utc};
use punchclock::core::aggregate::aggregate_daily;
use punchclock::core::report::build_report;
use punchclock::core::window::Windower;
use punchclock::core::zone::ZoneClock;
use punchclock::models::action::ClockAction;
use punchclock::models::clock_event::ClockEvent;
use punchclock::models::daily_aggregate::Anomaly;

fn toronto() -> ZoneClock {
    ZoneClock::new("America/Toronto").unwrap()
}

fn event(user: &str, action: ClockAction, at: DateTime<Utc>) -> ClockEvent {
    let clock = toronto();
    ClockEvent::new(
        user.to_string(),
        user.to_string(),
        action,
        at,
        clock.local_day_key(at),
        43.6532,
        -79.3832,
        Some(10.0),
        0.0,
        true,
    )
}

/// 2025-08-05 is an EDT day: local = UTC-4.
fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 5, h + 4, m, 0).unwrap()
}

#[test]
fn standard_day_aggregates_to_480_minutes_with_no_anomalies() {
    // Entry@09:00, LunchStart@12:00, LunchEnd@12:30, Exit@17:00 local
    let events = vec![
        event("ann@example.com", ClockAction::Entry, at(9, 0)),
        event("ann@example.com", ClockAction::LunchStart, at(12, 0)),
        event("ann@example.com", ClockAction::LunchEnd, at(12, 30)),
        event("ann@example.com", ClockAction::Exit, at(17, 0)),
    ];

    let rows = aggregate_daily(&events, &toronto());
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.day_key, "2025-08-05");
    assert_eq!(row.minutes_worked, 480);
    assert!(row.anomalies.is_empty());
    assert_eq!(row.entry_at, Some(at(9, 0)));
    assert_eq!(row.exit_at, Some(at(17, 0)));
}

#[test]
fn aggregation_is_idempotent() {
    let events = vec![
        event("ann@example.com", ClockAction::Entry, at(9, 0)),
        event("ann@example.com", ClockAction::Exit, at(17, 0)),
    ];

    let once = aggregate_daily(&events, &toronto());
    let twice = aggregate_daily(&events, &toronto());

    assert_eq!(once.len(), twice.len());
    assert_eq!(once[0].minutes_worked, twice[0].minutes_worked);
    assert_eq!(once[0].entry_at, twice[0].entry_at);
}

#[test]
fn later_duplicates_do_not_move_slots() {
    let base = vec![
        event("ann@example.com", ClockAction::Entry, at(9, 0)),
        event("ann@example.com", ClockAction::Exit, at(17, 0)),
    ];
    let mut with_dupes = base.clone();
    // a later duplicate entry (the gate would have rejected it, but the
    // reduction must not care)
    with_dupes.push(event("ann@example.com", ClockAction::Entry, at(10, 0)));

    let rows = aggregate_daily(&with_dupes, &toronto());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry_at, Some(at(9, 0)));
    assert_eq!(rows[0].minutes_worked, 480);

    // an *earlier* duplicate wins instead
    let mut with_earlier = base;
    with_earlier.push(event("ann@example.com", ClockAction::Entry, at(8, 0)));
    let rows = aggregate_daily(&with_earlier, &toronto());
    assert_eq!(rows[0].entry_at, Some(at(8, 0)));
    assert_eq!(rows[0].minutes_worked, 540);
}

#[test]
fn minutes_are_never_negative() {
    // exit before entry: clock skew or bad data
    let events = vec![
        event("ann@example.com", ClockAction::Entry, at(17, 0)),
        event("ann@example.com", ClockAction::Exit, at(9, 0)),
    ];

    let rows = aggregate_daily(&events, &toronto());
    assert_eq!(rows[0].minutes_worked, 0);
}

#[test]
fn incomplete_pairs_are_flagged() {
    let events = vec![
        event("ann@example.com", ClockAction::Entry, at(9, 0)),
        event("ann@example.com", ClockAction::LunchStart, at(12, 0)),
        event("bob@example.com", ClockAction::LunchEnd, at(12, 30)),
        event("bob@example.com", ClockAction::Exit, at(17, 0)),
    ];

    let rows = aggregate_daily(&events, &toronto());
    assert_eq!(rows.len(), 2);

    let ann = rows.iter().find(|r| r.user_key == "ann@example.com").unwrap();
    assert_eq!(
        ann.anomalies,
        vec![Anomaly::MissingExit, Anomaly::LunchStartWithoutEnd]
    );
    assert_eq!(ann.minutes_worked, 0);

    let bob = rows.iter().find(|r| r.user_key == "bob@example.com").unwrap();
    assert_eq!(
        bob.anomalies,
        vec![Anomaly::MissingEntry, Anomaly::LunchEndWithoutStart]
    );
}

#[test]
fn output_is_ordered_day_desc_then_user_asc() {
    let day1 = Utc.with_ymd_and_hms(2025, 8, 5, 13, 0, 0).unwrap();
    let day2 = Utc.with_ymd_and_hms(2025, 8, 6, 13, 0, 0).unwrap();

    let events = vec![
        event("bob@example.com", ClockAction::Entry, day1),
        event("ann@example.com", ClockAction::Entry, day2),
        event("ann@example.com", ClockAction::Entry, day1),
        event("bob@example.com", ClockAction::Entry, day2),
    ];

    let rows = aggregate_daily(&events, &toronto());
    let keys: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.day_key.clone(), r.user_key.clone()))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("2025-08-06".into(), "ann@example.com".into()),
            ("2025-08-06".into(), "bob@example.com".into()),
            ("2025-08-05".into(), "ann@example.com".into()),
            ("2025-08-05".into(), "bob@example.com".into()),
        ]
    );
}

#[test]
fn day_keys_are_local_not_utc() {
    // 02:00Z on Aug 6 is 22:00 EDT on Aug 5
    let late_evening = Utc.with_ymd_and_hms(2025, 8, 6, 2, 0, 0).unwrap();
    let events = vec![event("ann@example.com", ClockAction::Entry, late_evening)];

    let rows = aggregate_daily(&events, &toronto());
    assert_eq!(rows[0].day_key, "2025-08-05");
}

#[test]
fn report_totals_sum_minutes_and_count_complete_days() {
    let day1 = |h: u32| Utc.with_ymd_and_hms(2025, 8, 11, h + 4, 0, 0).unwrap();
    let day2 = |h: u32| Utc.with_ymd_and_hms(2025, 8, 12, h + 4, 0, 0).unwrap();

    let events = vec![
        event("ann@example.com", ClockAction::Entry, day1(9)),
        event("ann@example.com", ClockAction::Exit, day1(17)),
        event("ann@example.com", ClockAction::Entry, day2(9)),
        event("ann@example.com", ClockAction::Exit, day2(18)),
        // bob never clocks out: contributes no minutes and no days
        event("bob@example.com", ClockAction::Entry, day1(9)),
    ];

    let clock = toronto();
    let windower = Windower::new(
        chrono::NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
        clock.clone(),
    );
    let window = windower.current_window(day1(12)).unwrap();

    let report = build_report(window, &events, true, "", None, &clock);

    assert_eq!(report.totals.len(), 2);
    let ann = &report.totals[0];
    assert_eq!(ann.user_key, "ann@example.com");
    assert_eq!(ann.minutes, 480 + 540);
    assert_eq!(ann.days, 2);

    let bob = &report.totals[1];
    assert_eq!(bob.user_key, "bob@example.com");
    assert_eq!(bob.minutes, 0);
    assert_eq!(bob.days, 0);
}

#[test]
fn admin_text_filter_narrows_the_report() {
    let t = Utc.with_ymd_and_hms(2025, 8, 11, 13, 0, 0).unwrap();
    let events = vec![
        event("ann@example.com", ClockAction::Entry, t),
        event("bob@example.com", ClockAction::Entry, t),
    ];

    let clock = toronto();
    let windower = Windower::new(
        chrono::NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
        clock.clone(),
    );
    let window = windower.current_window(t).unwrap();

    let report = build_report(window.clone(), &events, true, "", Some("BOB"), &clock);
    assert_eq!(report.daily.len(), 1);
    assert_eq!(report.daily[0].user_key, "bob@example.com");

    // the filter is an admin capability: non-admin callers get no narrowing
    let report = build_report(window, &events, false, "ann@example.com", Some("BOB"), &clock);
    assert_eq!(report.daily.len(), 2);
}
