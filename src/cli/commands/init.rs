use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::zone::ZoneClock;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Initialize configuration and database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init {
        site_lat,
        site_lon,
        fence,
        min_accuracy,
        zone,
        anchor,
    } = &cli.command
    {
        let mut cfg = Config::load(cli.config.as_deref())?;

        if let Some(db) = &cli.db {
            cfg.database = db.clone();
        }
        if let Some(v) = site_lat {
            cfg.site_latitude = Some(*v);
        }
        if let Some(v) = site_lon {
            cfg.site_longitude = Some(*v);
        }
        if let Some(v) = fence {
            cfg.geofence_radius_m = *v;
        }
        if let Some(v) = min_accuracy {
            cfg.min_accuracy_m = *v;
        }
        if let Some(z) = zone {
            cfg.time_zone = z.clone();
        }
        if let Some(a) = anchor {
            cfg.anchor_date = a.clone();
        }

        // Fail early on an unusable zone or anchor.
        ZoneClock::new(&cfg.time_zone)?;
        cfg.anchor()?;

        let config_path = cfg.save(cli.config.as_deref())?;
        success(format!("Config file: {}", config_path.display()));

        cfg.ensure_database_dir()?;
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        ttlog(&pool.conn, "init", "", "database initialized")?;

        success(format!("Database:    {}", cfg.database));
    }

    Ok(())
}
