//! Civil-calendar clock for one fixed IANA time zone.
//!
//! All local-day bookkeeping goes through here: day keys, local
//! midnights and weekday checks are computed in the configured zone, so
//! offset changes across DST transitions are handled by the zone
//! database rather than by wall-clock arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct ZoneClock {
    tz: Tz,
}

impl ZoneClock {
    pub fn new(zone_name: &str) -> AppResult<Self> {
        let tz: Tz = zone_name
            .parse()
            .map_err(|_| AppError::InvalidZone(zone_name.to_string()))?;
        Ok(Self { tz })
    }

    pub fn zone_name(&self) -> &str {
        self.tz.name()
    }

    /// The civil date of `instant` as seen in the configured zone.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// The `YYYY-MM-DD` day key of `instant` in the configured zone.
    pub fn local_day_key(&self, instant: DateTime<Utc>) -> String {
        self.local_date(instant).format("%Y-%m-%d").to_string()
    }

    /// The absolute instant of 00:00:00 local civil time on `date`.
    ///
    /// Ambiguous local times (fall-back) resolve to the earlier
    /// instant; skipped local times (spring-forward gaps over midnight)
    /// resolve to the first valid instant of the day, per the zone
    /// database. No custom DST rules are invented here.
    pub fn local_midnight(&self, date: NaiveDate) -> AppResult<DateTime<Utc>> {
        let naive = date.and_time(NaiveTime::MIN);
        match self.tz.from_local_datetime(&naive) {
            chrono::LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            chrono::LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            chrono::LocalResult::None => {
                let shifted = naive + Duration::hours(1);
                self.tz
                    .from_local_datetime(&shifted)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok_or_else(|| {
                        AppError::InvalidDate(format!("no local midnight on {date} in {}", self.tz))
                    })
            }
        }
    }

    /// Parse a `YYYY-MM-DD` day key and return its local midnight.
    pub fn midnight_of_key(&self, day_key: &str) -> AppResult<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(day_key, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(day_key.to_string()))?;
        self.local_midnight(date)
    }

    /// True if the local calendar weekday of `instant` is Sunday.
    pub fn is_local_sunday(&self, instant: DateTime<Utc>) -> bool {
        self.local_date(instant).weekday() == Weekday::Sun
    }
}
