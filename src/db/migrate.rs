use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `clock_events` table exists.
fn clock_events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='clock_events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `clock_events` table with the modern schema.
///
/// The unique index on (user_key, day_key, action) is what makes
/// admit-and-append atomic: a racing duplicate submission fails the
/// insert instead of double-writing.
fn create_clock_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_key     TEXT NOT NULL,
            user_name    TEXT NOT NULL,
            action       TEXT NOT NULL CHECK(action IN ('entry','lunch_start','lunch_end','exit')),
            occurred_at  TEXT NOT NULL,
            day_key      TEXT NOT NULL,
            latitude     REAL NOT NULL,
            longitude    REAL NOT NULL,
            accuracy_m   REAL,
            distance_m   REAL NOT NULL,
            within_fence INTEGER NOT NULL DEFAULT 1,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS ux_clock_events_user_day_action
            ON clock_events(user_key, day_key, action);
        CREATE INDEX IF NOT EXISTS idx_clock_events_day ON clock_events(day_key);
        CREATE INDEX IF NOT EXISTS idx_clock_events_occurred ON clock_events(occurred_at);
        "#,
    )?;
    Ok(())
}

/// True if the migration marker is already present in the log table.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Add the `source` index used by the audit views, guarded by a marker.
fn migrate_add_source_index(conn: &Connection) -> Result<()> {
    let version = "20250801_0001_add_source_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_clock_events_source ON clock_events(source);",
    )?;
    mark_migration_applied(conn, version, "Added source index to clock_events")?;

    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure clock_events table exists
    if !clock_events_table_exists(conn)? {
        create_clock_events_table(conn)?;
        success("Created clock_events table.");
    }

    // 3) Guarded incremental migrations
    migrate_add_source_index(conn)?;

    Ok(())
}
