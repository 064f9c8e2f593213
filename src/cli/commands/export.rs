use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::zone::ZoneClock;
use crate::db::pool::DbPool;
use crate::db::queries::{load_events_by_day_range, ttlog};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;

/// Export daily aggregates for a day-key range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        start,
        end,
        user,
        force,
    } = cmd
    {
        parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
        parse_date(end).ok_or_else(|| AppError::InvalidDate(end.clone()))?;

        let out_path = expand_tilde(file).to_string_lossy().to_string();

        let clock = ZoneClock::new(&cfg.time_zone)?;
        let pool = DbPool::new(&cfg.database)?;

        let user_key = user.as_deref().map(|u| u.trim().to_lowercase());
        let events =
            load_events_by_day_range(&pool.conn, start, end, user_key.as_deref())?;

        if events.is_empty() {
            info(format!("No events between {start} and {end}."));
        }

        let rows = ExportLogic::write(&events, &clock, format, &out_path, *force)?;

        ttlog(
            &pool.conn,
            "export",
            &out_path,
            &format!("{rows} daily rows exported ({start} → {end})"),
        )?;
    }

    Ok(())
}
