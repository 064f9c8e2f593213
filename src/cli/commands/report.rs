use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_report;
use crate::core::window::Windower;
use crate::core::zone::ZoneClock;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::parse_instant;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, minutes_to_hours};
use chrono::{SecondsFormat, Utc};

/// Build and print reports for a page of windows.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        page,
        per,
        at,
        as_user,
        filter,
    } = cmd
    {
        let now = match at {
            Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => Utc::now(),
        };

        let clock = ZoneClock::new(&cfg.time_zone)?;
        let windower = Windower::new(cfg.anchor()?, clock.clone());
        let pool = DbPool::new(&cfg.database)?;

        // A non-admin caller only ever sees their own events; the
        // restriction happens at the query, the engine trusts the set.
        let caller_is_admin = as_user.is_none();
        let caller_key = as_user
            .as_deref()
            .map(|u| u.trim().to_lowercase())
            .unwrap_or_default();

        for window in windower.windows_page(now, *page, *per)? {
            let events = load_events_between(
                &pool.conn,
                window.start_instant,
                window.end_instant_exclusive,
                if caller_is_admin {
                    None
                } else {
                    Some(caller_key.as_str())
                },
            )?;

            let report = build_report(
                window,
                &events,
                caller_is_admin,
                &caller_key,
                filter.as_deref(),
                &clock,
            );

            header(format!("Window {}", report.window.label()));

            if report.daily.is_empty() {
                println!("(no events)");
                continue;
            }

            let mut daily = Table::new(vec![
                Column::new("Day", 10),
                Column::new("User", 28),
                Column::new("Entry", 20),
                Column::new("Exit", 20),
                Column::new("Worked", 6),
                Column::new("Anomalies", 30),
            ]);
            for row in &report.daily {
                daily.add_row(vec![
                    row.day_key.clone(),
                    row.user_key.clone(),
                    row.entry_at
                        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                        .unwrap_or_default(),
                    row.exit_at
                        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                        .unwrap_or_default(),
                    format_minutes(row.minutes_worked),
                    row.anomalies
                        .iter()
                        .map(|a| a.as_str())
                        .collect::<Vec<_>>()
                        .join(";"),
                ]);
            }
            print!("{}", daily.render());

            let mut totals = Table::new(vec![
                Column::new("User", 28),
                Column::new("Minutes", 7),
                Column::new("Hours", 6),
                Column::new("Days", 4),
            ]);
            for t in &report.totals {
                totals.add_row(vec![
                    t.user_key.clone(),
                    t.minutes.to_string(),
                    minutes_to_hours(t.minutes),
                    t.days.to_string(),
                ]);
            }
            println!("Totals:");
            print!("{}", totals.render());
        }
    }

    Ok(())
}
