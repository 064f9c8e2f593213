use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI application to record geofenced clock events and build bi-weekly reports with SQLite
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A geofenced punch-clock CLI: record Entry/Lunch/Exit events and build bi-weekly payroll reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init {
        /// Work-site latitude in degrees
        #[arg(long = "site-lat", value_name = "DEG", allow_hyphen_values = true)]
        site_lat: Option<f64>,

        /// Work-site longitude in degrees
        #[arg(long = "site-lon", value_name = "DEG", allow_hyphen_values = true)]
        site_lon: Option<f64>,

        /// Geofence radius in meters (0 disables the fence)
        #[arg(long = "fence", value_name = "METERS")]
        fence: Option<f64>,

        /// Worst acceptable reported accuracy in meters (0 disables the check)
        #[arg(long = "min-accuracy", value_name = "METERS")]
        min_accuracy: Option<f64>,

        /// IANA time zone for civil-day bookkeeping
        #[arg(long = "zone", value_name = "TZ")]
        zone: Option<String>,

        /// Anchor date of the bi-weekly cycle (YYYY-MM-DD)
        #[arg(long = "anchor", value_name = "DATE")]
        anchor: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration (site coordinates, zone, anchor)")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record a clock event (Entry, LunchStart, LunchEnd, Exit)
    Clock {
        /// Action to record (case/spacing variants tolerated)
        action: String,

        /// User email (normalized to lowercase as the user key)
        #[arg(long = "user", value_name = "EMAIL")]
        user: String,

        /// Display name (defaults to the user key)
        #[arg(long = "name", value_name = "NAME")]
        name: Option<String>,

        /// Reported latitude in degrees
        #[arg(long = "lat", value_name = "DEG", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Reported longitude in degrees
        #[arg(long = "lon", value_name = "DEG", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Reported accuracy radius in meters
        #[arg(long = "acc", value_name = "METERS")]
        acc: Option<f64>,

        /// Instant the action happened (RFC3339; defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Local civil day the action belongs to (YYYY-MM-DD; defaults to
        /// the local day of --at in the configured zone)
        #[arg(long = "day", value_name = "DATE")]
        day: Option<String>,
    },

    /// Show which actions a user has recorded for a day
    Status {
        /// User email
        #[arg(long = "user", value_name = "EMAIL")]
        user: String,

        /// Day key (YYYY-MM-DD; defaults to today in the configured zone)
        #[arg(long = "day", value_name = "DATE")]
        day: Option<String>,
    },

    /// List bi-weekly pay-cycle windows, most recent first
    Windows {
        /// 1-based page number (page 1 starts at the current window)
        #[arg(long, short, default_value_t = 1)]
        page: i64,

        /// Windows per page
        #[arg(long, default_value_t = 5)]
        per: i64,

        /// Compute windows as of this instant (RFC3339; defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Build per-day and per-user reports for a page of windows
    Report {
        /// 1-based page number (page 1 starts at the current window)
        #[arg(long, short, default_value_t = 1)]
        page: i64,

        /// Windows per page
        #[arg(long, default_value_t = 5)]
        per: i64,

        /// Compute windows as of this instant (RFC3339; defaults to now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Build the report as a non-admin caller: restrict to this user
        /// and ignore --filter
        #[arg(long = "as-user", value_name = "EMAIL")]
        as_user: Option<String>,

        /// Admin-only text filter on user email/name (case-insensitive)
        #[arg(long = "filter", value_name = "TEXT")]
        filter: Option<String>,
    },

    /// Export daily aggregates for a day-key range
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// First day key of the range (YYYY-MM-DD, inclusive)
        #[arg(long, value_name = "DATE")]
        start: String,

        /// End day key of the range (YYYY-MM-DD, exclusive)
        #[arg(long, value_name = "DATE")]
        end: String,

        /// Restrict the export to one user email
        #[arg(long = "user", value_name = "EMAIL")]
        user: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
