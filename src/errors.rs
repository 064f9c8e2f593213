//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Admission rejections
    // ---------------------------
    #[error("Geolocation required. Enable location and try again.")]
    MissingLocation,

    #[error(
        "Location accuracy too low (±{reported:.0}m, limit {limit:.0}m). Move to an open area and retry."
    )]
    AccuracyTooLow { reported: f64, limit: f64 },

    #[error("Outside geofence (≈{distance_m:.0} m, fence {fence_m:.0} m). You must be on-site to clock.")]
    OutsideGeofence { distance_m: f64, fence_m: f64 },

    #[error("Duplicate action: {0} already recorded for this day")]
    DuplicateAction(String),

    #[error("Out of order: {requires} required before {action}")]
    OutOfOrder { action: String, requires: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid clock action: {0}")]
    InvalidAction(String),

    #[error("Unknown time zone: {0}")]
    InvalidZone(String),

    #[error("Invalid paging: {0}")]
    InvalidPaging(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
