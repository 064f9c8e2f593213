//! Anchored bi-weekly pay-cycle windows.
//!
//! Every instant maps deterministically to one 14-day window counted
//! from a fixed anchor date. Window boundaries are civil dates in the
//! configured zone, converted independently to absolute instants, so a
//! window spanning a DST transition is still exactly 14 civil days.

use crate::core::zone::ZoneClock;
use crate::errors::{AppError, AppResult};
use crate::models::window::DayWindow;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Length of a pay cycle. Fixed by the payroll process; reporting math
/// assumes it, so it is a constant rather than configuration.
pub const WINDOW_LENGTH_DAYS: i64 = 14;

#[derive(Debug, Clone)]
pub struct Windower {
    anchor: NaiveDate,
    clock: ZoneClock,
}

impl Windower {
    pub fn new(anchor: NaiveDate, clock: ZoneClock) -> Self {
        Self { anchor, clock }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn clock(&self) -> &ZoneClock {
        &self.clock
    }

    /// Cycle index of the window containing `now`. Calendar-day
    /// difference with euclidean division: instants before the anchor
    /// land in negative cycles, still contiguous (floor, not
    /// truncation toward zero).
    pub fn cycle_index(&self, now: DateTime<Utc>) -> i64 {
        let local_today = self.clock.local_date(now);
        let days = (local_today - self.anchor).num_days();
        days.div_euclid(WINDOW_LENGTH_DAYS)
    }

    /// The window at a given cycle index.
    pub fn window_at(&self, cycle_index: i64) -> AppResult<DayWindow> {
        let start_local = self.anchor + Duration::days(cycle_index * WINDOW_LENGTH_DAYS);
        let end_local = start_local + Duration::days(WINDOW_LENGTH_DAYS);

        Ok(DayWindow {
            start_local,
            end_local_exclusive: end_local,
            start_instant: self.clock.local_midnight(start_local)?,
            end_instant_exclusive: self.clock.local_midnight(end_local)?,
            cycle_index,
        })
    }

    /// The 14-day window containing `now`.
    pub fn current_window(&self, now: DateTime<Utc>) -> AppResult<DayWindow> {
        self.window_at(self.cycle_index(now))
    }

    /// A page of windows going backwards in time, most recent first.
    /// `page` is 1-based; page 1 starts at the current window.
    pub fn windows_page(
        &self,
        now: DateTime<Utc>,
        page: i64,
        per: i64,
    ) -> AppResult<Vec<DayWindow>> {
        if page <= 0 {
            return Err(AppError::InvalidPaging(format!("page must be >= 1, got {page}")));
        }
        if per <= 0 {
            return Err(AppError::InvalidPaging(format!(
                "windows per page must be >= 1, got {per}"
            )));
        }

        let current = self.cycle_index(now);
        let first = current - (page - 1) * per;

        let mut windows = Vec::with_capacity(per as usize);
        for i in 0..per {
            windows.push(self.window_at(first - i)?);
        }
        Ok(windows)
    }
}
