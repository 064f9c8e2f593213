use crate::cli::commands::clock::render_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::zone::ZoneClock;
use crate::db::pool::DbPool;
use crate::db::queries::day_status;
use crate::errors::AppResult;
use chrono::Utc;

/// Show which actions a user has recorded for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user, day } = cmd {
        let clock = ZoneClock::new(&cfg.time_zone)?;
        let day_key = match day {
            Some(d) => d.clone(),
            None => clock.local_day_key(Utc::now()),
        };

        let user_key = user.trim().to_lowercase();
        let pool = DbPool::new(&cfg.database)?;
        let flags = day_status(&pool.conn, &user_key, &day_key)?;

        println!("{} on {}", user_key, day_key);
        println!("Day status: {}", render_status(&flags));
    }

    Ok(())
}
