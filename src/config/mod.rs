use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Application configuration, persisted as YAML in the platform config
/// directory. Constructed once at startup and immutable afterwards;
/// there is no process-wide mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Work-site coordinates. No default: submissions are refused while
    /// these are unset or non-finite.
    #[serde(default)]
    pub site_latitude: Option<f64>,
    #[serde(default)]
    pub site_longitude: Option<f64>,

    /// Maximum allowed distance from the site in meters; 0 disables the fence.
    #[serde(default)]
    pub geofence_radius_m: f64,

    /// Worst acceptable reported accuracy radius in meters; 0 disables the check.
    #[serde(default)]
    pub min_accuracy_m: f64,

    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Civil date the bi-weekly cycle is anchored to.
    #[serde(default = "default_anchor_date")]
    pub anchor_date: String,
}

fn default_time_zone() -> String {
    "America/Toronto".to_string()
}

fn default_anchor_date() -> String {
    "2025-07-27".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            site_latitude: None,
            site_longitude: None,
            geofence_radius_m: 0.0,
            min_accuracy_m: 0.0,
            time_zone: default_time_zone(),
            anchor_date: default_anchor_date(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// Load configuration from the given file (or the standard location),
    /// falling back to defaults if no file exists yet.
    pub fn load(custom_path: Option<&str>) -> AppResult<Self> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration to the given file (or the standard location).
    pub fn save(&self, custom_path: Option<&str>) -> AppResult<PathBuf> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Validated work-site coordinates. Absence or non-finite values are a
    /// fatal configuration error, distinct from user input errors.
    pub fn site(&self) -> AppResult<(f64, f64)> {
        match (self.site_latitude, self.site_longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Ok((lat, lon)),
            _ => Err(AppError::Config(
                "site latitude/longitude not set".to_string(),
            )),
        }
    }

    /// Validated anchor date for the bi-weekly cycle.
    pub fn anchor(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.anchor_date, "%Y-%m-%d")
            .map_err(|_| AppError::Config(format!("invalid anchor date '{}'", self.anchor_date)))
    }

    /// Ensure the database file's parent directory exists.
    pub fn ensure_database_dir(&self) -> AppResult<()> {
        if let Some(dir) = Path::new(&self.database).parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
