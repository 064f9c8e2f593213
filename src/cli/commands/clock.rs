use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{Submission, SubmitLogic};
use crate::core::zone::ZoneClock;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::day_status::DayStatusFlags;
use crate::ui::messages::success;
use crate::utils::date::parse_instant;
use chrono::Utc;

pub fn render_status(flags: &DayStatusFlags) -> String {
    fn yn(b: bool) -> &'static str {
        if b { "yes" } else { "no" }
    }
    format!(
        "Entry={} LunchStart={} LunchEnd={} Exit={}",
        yn(flags.has_entry),
        yn(flags.has_lunch_start),
        yn(flags.has_lunch_end),
        yn(flags.has_exit)
    )
}

/// Record a clock event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        action,
        user,
        name,
        lat,
        lon,
        acc,
        at,
        day,
    } = cmd
    {
        //
        // 1. Normalize the action label (unknown labels are rejected)
        //
        let action = ClockAction::parse(action)?;

        //
        // 2. Resolve the instant (client-asserted, defaults to now)
        //
        let occurred_at = match at {
            Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => Utc::now(),
        };

        //
        // 3. Resolve the local day key (client-authoritative if given)
        //
        let clock = ZoneClock::new(&cfg.time_zone)?;
        let day_key = match day {
            Some(d) => d.clone(),
            None => clock.local_day_key(occurred_at),
        };

        //
        // 4. Open DB and run the admission
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let receipt = SubmitLogic::apply(
            &mut pool,
            cfg,
            Submission {
                user_key: user.clone(),
                user_name: name.clone(),
                action,
                occurred_at,
                day_key: day_key.clone(),
                latitude: *lat,
                longitude: *lon,
                accuracy_m: *acc,
            },
        )?;

        success(format!(
            "{} recorded for {} on {} (≈{:.0} m from site).",
            action,
            name.as_deref().unwrap_or(user),
            day_key,
            receipt.distance_m
        ));
        println!("Day status: {}", render_status(&receipt.status));
    }

    Ok(())
}
