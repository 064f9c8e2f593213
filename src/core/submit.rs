//! High-level admission logic for a submitted clock event:
//! geofence check, fresh day-status read, ledger gate, atomic append.

use crate::config::Config;
use crate::core::{gate, geo};
use crate::db::pool::DbPool;
use crate::db::queries::{day_status, insert_event, ttlog};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::clock_event::ClockEvent;
use crate::models::day_status::DayStatusFlags;
use chrono::{DateTime, NaiveDate, Utc};

/// One submission as received from the caller. `day_key` is the
/// client-asserted local civil date and is authoritative for
/// sequencing; it is not re-derived from `occurred_at` at write time.
#[derive(Debug, Clone)]
pub struct Submission {
    pub user_key: String,
    pub user_name: Option<String>,
    pub action: ClockAction,
    pub occurred_at: DateTime<Utc>,
    pub day_key: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy_m: Option<f64>,
}

/// What a successful admission reports back: the audit figures and the
/// day's updated status flags for the next UI state.
#[derive(Debug, Clone)]
pub struct AdmissionReceipt {
    pub event_id: i64,
    pub distance_m: f64,
    pub within_fence: bool,
    pub status: DayStatusFlags,
}

pub struct SubmitLogic;

impl SubmitLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        submission: Submission,
    ) -> AppResult<AdmissionReceipt> {
        let user_key = submission.user_key.trim().to_lowercase();
        if user_key.is_empty() {
            return Err(AppError::Other("user key must not be empty".to_string()));
        }

        NaiveDate::parse_from_str(&submission.day_key, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(submission.day_key.clone()))?;

        // 1. Geofence and accuracy. Site coordinates come from validated
        //    configuration; their absence is fatal, not a user error.
        let (site_lat, site_lon) = cfg.site()?;
        let check = geo::evaluate(
            site_lat,
            site_lon,
            cfg.geofence_radius_m,
            cfg.min_accuracy_m,
            submission.latitude,
            submission.longitude,
            submission.accuracy_m,
        )?;

        if !check.within_fence {
            return Err(AppError::OutsideGeofence {
                distance_m: check.distance_m,
                fence_m: cfg.geofence_radius_m,
            });
        }

        // 2. Sequencing, against a fresh snapshot of the day.
        let current = day_status(&pool.conn, &user_key, &submission.day_key)?;
        let next = gate::admit(current, submission.action)?;

        // 3. Append. The unique index turns a lost race into
        //    DuplicateAction rather than a second row.
        let user_name = submission
            .user_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&user_key)
            .to_string();

        let (lat, lon) = (
            submission.latitude.unwrap_or_default(),
            submission.longitude.unwrap_or_default(),
        );
        let ev = ClockEvent::new(
            user_key.clone(),
            user_name,
            submission.action,
            submission.occurred_at,
            submission.day_key.clone(),
            lat,
            lon,
            submission.accuracy_m,
            check.distance_m,
            check.within_fence,
        );

        let event_id = insert_event(&pool.conn, &ev)?;

        ttlog(
            &pool.conn,
            "clock",
            &format!("{}:{}", user_key, submission.day_key),
            &format!(
                "{} recorded at {} (≈{:.0} m from site)",
                submission.action,
                ev.occurred_at_str(),
                check.distance_m
            ),
        )?;

        Ok(AdmissionReceipt {
            event_id,
            distance_m: check.distance_m,
            within_fence: check.within_fence,
            status: next,
        })
    }
}
