//! Schema creation and migrations.
//!
//! Every applied migration leaves a `migration_applied` row in the log
//! table keyed by marker name, so reruns are no-ops.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages;
use rusqlite::{Connection, params};

const WORKERS_SCHEMA: &str = "CREATE TABLE workers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    position TEXT,
    hat_tag TEXT,
    shirt_tag TEXT,
    boot_tag TEXT,
    glove_tag TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)";

const SCANS_SCHEMA: &str = "CREATE TABLE scans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    worker_id INTEGER,
    scan_time TEXT,
    scanned_tag_id TEXT,
    equipment_label TEXT,
    source TEXT NOT NULL DEFAULT 'device',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)";

pub fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT,
            message TEXT
        )",
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let count: i64 = conn
        .prepare_cached("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1")?
        .query_row(params![name], |row| row.get(0))?;
    Ok(count > 0)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, marker: &str) -> AppResult<bool> {
    let count: i64 = conn
        .prepare_cached(
            "SELECT COUNT(*) FROM log WHERE operation='migration_applied' AND target=?1",
        )?
        .query_row(params![marker], |row| row.get(0))?;
    Ok(count > 0)
}

fn mark_applied(conn: &Connection, marker: &str, message: &str) -> AppResult<()> {
    ttlog(conn, "migration_applied", Some(marker), Some(message))
}

/// Rebuild the workers table without the derived columns some legacy
/// databases stored (hat_status .. glove_status, latest_scan and its
/// misspelled ancestor). Status is computed on read, never persisted.
fn drop_worker_status_columns(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(&format!(
        "PRAGMA foreign_keys=OFF;
         BEGIN;
         ALTER TABLE workers RENAME TO workers_legacy;
         {WORKERS_SCHEMA};
         INSERT INTO workers (id, name, position, hat_tag, shirt_tag, boot_tag, glove_tag, created_at)
             SELECT id, name, position, hat_tag, shirt_tag, boot_tag, glove_tag, created_at
             FROM workers_legacy;
         DROP TABLE workers_legacy;
         COMMIT;
         PRAGMA foreign_keys=ON;"
    ))?;
    Ok(())
}

/// Run everything the current binary requires on this database.
pub fn run_pending_migrations(conn: &Connection, is_test: bool) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "workers")? {
        conn.execute_batch(WORKERS_SCHEMA)?;
        mark_applied(conn, "create_workers", "created workers table")?;
    }
    if !table_exists(conn, "scans")? {
        conn.execute_batch(SCANS_SCHEMA)?;
        mark_applied(conn, "create_scans", "created scans table")?;
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_scans_time ON scans(scan_time);
         CREATE INDEX IF NOT EXISTS idx_scans_worker ON scans(worker_id);",
    )?;

    let has_stored_status = column_exists(conn, "workers", "hat_status")?
        || column_exists(conn, "workers", "latest_scan")?
        || column_exists(conn, "workers", "lastest_scan")?;
    if has_stored_status && !migration_applied(conn, "drop_worker_status_columns")? {
        drop_worker_status_columns(conn)?;
        mark_applied(
            conn,
            "drop_worker_status_columns",
            "dropped stored status columns from workers",
        )?;
        if !is_test {
            messages::info("Migrated workers table: stored status columns removed");
        }
    }

    Ok(())
}
