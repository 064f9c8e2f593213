use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::formatting::pad_right;

/// Print the internal audit log table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;

        for (date, operation, target, message) in load_log(&pool.conn)? {
            let op_target = if target.is_empty() {
                operation
            } else {
                format!("{operation} ({target})")
            };
            println!("{} {} {}", pad_right(&date, 25), pad_right(&op_target, 30), message);
        }
    }

    Ok(())
}
