use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::zone::ZoneClock;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::{Datelike, Weekday};

/// View or validate the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            println!("{yaml}");
        }

        if *check {
            cfg.site()?;
            ZoneClock::new(&cfg.time_zone)?;
            let anchor = cfg.anchor()?;

            if anchor.weekday() != Weekday::Sun {
                warning(format!(
                    "Anchor date {} is a {:?}, not a Sunday — pay cycles will not start on Sundays.",
                    cfg.anchor_date,
                    anchor.weekday()
                ));
            }

            success("Configuration is valid.");
        }
    }

    Ok(())
}
