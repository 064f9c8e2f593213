use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::window::Windower;
use crate::core::zone::ZoneClock;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_instant;
use chrono::Utc;

/// List bi-weekly windows, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Windows { page, per, at } = cmd {
        let now = match at {
            Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => Utc::now(),
        };

        let clock = ZoneClock::new(&cfg.time_zone)?;
        let windower = Windower::new(cfg.anchor()?, clock);
        let current = windower.cycle_index(now);

        for w in windower.windows_page(now, *page, *per)? {
            let marker = if w.cycle_index == current { "*" } else { " " };
            println!(
                "{marker} [{:>4}] {}   ({} → {})",
                w.cycle_index,
                w.label(),
                w.start_instant.to_rfc3339(),
                w.end_instant_exclusive.to_rfc3339()
            );
        }
    }

    Ok(())
}
