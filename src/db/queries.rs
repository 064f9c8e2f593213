use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::clock_event::ClockEvent;
use crate::models::day_status::DayStatusFlags;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Result, Row, params};

const EVENT_COLUMNS: &str = "id, user_key, user_name, action, occurred_at, day_key, \
    latitude, longitude, accuracy_m, distance_m, within_fence, source, created_at";

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let action_str: String = row.get("action")?;
    let action = ClockAction::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    let occurred_str: String = row.get("occurred_at")?;
    let occurred_at = DateTime::parse_from_rfc3339(&occurred_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(occurred_str.clone())),
            )
        })?;

    Ok(ClockEvent {
        id: row.get("id")?,
        user_key: row.get("user_key")?,
        user_name: row.get("user_name")?,
        action,
        occurred_at,
        day_key: row.get("day_key")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        accuracy_m: row.get("accuracy_m")?,
        distance_m: row.get("distance_m")?,
        within_fence: row.get::<_, i32>("within_fence")? == 1,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Append a clock event. The unique (user_key, day_key, action) index is
/// the last line of defense against racing duplicate submissions: a
/// conflicting insert surfaces as `DuplicateAction` instead of a second
/// row.
pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO clock_events (user_key, user_name, action, occurred_at, day_key, \
         latitude, longitude, accuracy_m, distance_m, within_fence, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            ev.user_key,
            ev.user_name,
            ev.action.to_db_str(),
            ev.occurred_at_str(),
            ev.day_key,
            ev.latitude,
            ev.longitude,
            ev.accuracy_m,
            ev.distance_m,
            if ev.within_fence { 1 } else { 0 },
            ev.source,
            ev.created_at,
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateAction(ev.action.as_str().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the day's events for one user, ordered by occurrence.
pub fn load_day_events(conn: &Connection, user_key: &str, day_key: &str) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {EVENT_COLUMNS} FROM clock_events
         WHERE user_key = ?1 AND day_key = ?2
         ORDER BY occurred_at ASC"
    ))?;
    let rows = stmt.query_map([user_key, day_key], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Authoritative snapshot of which actions a (user, day) pair has
/// recorded. Re-read on every admission; never cached across requests.
pub fn day_status(conn: &Connection, user_key: &str, day_key: &str) -> AppResult<DayStatusFlags> {
    let mut stmt = conn.prepare_cached(
        "SELECT action FROM clock_events WHERE user_key = ?1 AND day_key = ?2",
    )?;
    let rows = stmt.query_map([user_key, day_key], |row| row.get::<_, String>(0))?;

    let mut actions = Vec::new();
    for r in rows {
        if let Some(action) = ClockAction::from_db_str(&r?) {
            actions.push(action);
        }
    }
    Ok(DayStatusFlags::from_actions(actions))
}

/// Load events whose occurrence falls in [start, end), optionally
/// restricted to one user. The stored RFC3339-UTC text is fixed-width,
/// so the range comparison is done directly in SQL.
pub fn load_events_between(
    conn: &Connection,
    start: DateTime<Utc>,
    end_exclusive: DateTime<Utc>,
    user_key: Option<&str>,
) -> AppResult<Vec<ClockEvent>> {
    let start_s = start.to_rfc3339_opts(SecondsFormat::Secs, true);
    let end_s = end_exclusive.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut out = Vec::new();
    if let Some(user) = user_key {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {EVENT_COLUMNS} FROM clock_events
             WHERE occurred_at >= ?1 AND occurred_at < ?2 AND user_key = ?3
             ORDER BY occurred_at ASC"
        ))?;
        let rows = stmt.query_map(params![start_s, end_s, user], map_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {EVENT_COLUMNS} FROM clock_events
             WHERE occurred_at >= ?1 AND occurred_at < ?2
             ORDER BY occurred_at ASC"
        ))?;
        let rows = stmt.query_map(params![start_s, end_s], map_row)?;
        for r in rows {
            out.push(r?);
        }
    }
    Ok(out)
}

/// Load events by day-key range [start, end), optionally restricted to
/// one user. This is the export path: day keys are the stored,
/// client-authoritative civil dates.
pub fn load_events_by_day_range(
    conn: &Connection,
    start_key: &str,
    end_key_exclusive: &str,
    user_key: Option<&str>,
) -> AppResult<Vec<ClockEvent>> {
    let mut out = Vec::new();
    if let Some(user) = user_key {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {EVENT_COLUMNS} FROM clock_events
             WHERE day_key >= ?1 AND day_key < ?2 AND user_key = ?3
             ORDER BY user_key ASC, day_key ASC, occurred_at ASC"
        ))?;
        let rows = stmt.query_map(params![start_key, end_key_exclusive, user], map_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {EVENT_COLUMNS} FROM clock_events
             WHERE day_key >= ?1 AND day_key < ?2
             ORDER BY user_key ASC, day_key ASC, occurred_at ASC"
        ))?;
        let rows = stmt.query_map(params![start_key, end_key_exclusive], map_row)?;
        for r in rows {
            out.push(r?);
        }
    }
    Ok(out)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM clock_events")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}

/// Append an audit row to the internal log table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Utc::now().to_rfc3339(); // ISO 8601
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![&now, operation, target, message])?;
    Ok(())
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, operation, target, message FROM log ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
