use super::action::ClockAction;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A single admitted clock event. Append-only: rows are created once by
/// a successful admission and never mutated or deleted by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,
    pub user_key: String,  // normalized (lowercased) email
    pub user_name: String, // display label, defaults to user_key
    pub action: ClockAction,
    pub occurred_at: DateTime<Utc>, // client-asserted instant
    pub day_key: String,            // YYYY-MM-DD local civil date, client-authoritative
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: Option<f64>,
    pub distance_m: f64,    // audit: haversine distance to the work site
    pub within_fence: bool, // audit: admission verdict
    pub source: String,
    pub created_at: String, // server receipt time, ISO8601
}

impl ClockEvent {
    /// Constructor for events created by an admission; `id = 0` until the
    /// store assigns one.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_key: String,
        user_name: String,
        action: ClockAction,
        occurred_at: DateTime<Utc>,
        day_key: String,
        latitude: f64,
        longitude: f64,
        accuracy_m: Option<f64>,
        distance_m: f64,
        within_fence: bool,
    ) -> Self {
        Self {
            id: 0,
            user_key,
            user_name,
            action,
            occurred_at,
            day_key,
            latitude,
            longitude,
            accuracy_m,
            distance_m,
            within_fence,
            source: "cli".to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// RFC3339 UTC with second precision: the stored `occurred_at` format.
    /// Fixed-width, so lexicographic TEXT comparison orders chronologically.
    pub fn occurred_at_str(&self) -> String {
        self.occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
