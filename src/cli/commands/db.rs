use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::count_events;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Database maintenance: migrations, integrity check, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let verdict: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if verdict == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Migration(format!(
                    "integrity check failed: {verdict}"
                )));
            }
        }

        if *show_info {
            info(format!("Database: {}", cfg.database));
            info(format!("Clock events: {}", count_events(&pool.conn)?));
        }
    }

    Ok(())
}
