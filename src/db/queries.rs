use crate::errors::AppResult;
use crate::models::scan::{NewScan, ScanEvent};
use crate::models::worker::{NewWorker, Worker};
use crate::utils::date::{from_store, to_store};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

pub fn map_worker_row(row: &Row) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        hat_tag: row.get(3)?,
        shirt_tag: row.get(4)?,
        boot_tag: row.get(5)?,
        glove_tag: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn map_scan_row(row: &Row) -> rusqlite::Result<ScanEvent> {
    let raw_time: Option<String> = row.get(2)?;
    Ok(ScanEvent {
        id: row.get(0)?,
        worker_id: row.get(1)?,
        // malformed timestamps read as absent rather than failing the query
        scan_time: raw_time.as_deref().and_then(from_store),
        scanned_tag_id: row.get(3)?,
        equipment_label: row.get(4)?,
        source: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn load_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, position, hat_tag, shirt_tag, boot_tag, glove_tag, created_at
         FROM workers ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_worker_row)?;
    let mut out = Vec::new();
    for w in rows {
        out.push(w?);
    }
    Ok(out)
}

pub fn worker_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let count: i64 = conn
        .prepare_cached("SELECT COUNT(*) FROM workers WHERE id = ?1")?
        .query_row(params![id], |row| row.get(0))?;
    Ok(count > 0)
}

/// Scans with `from <= scan_time < to`, oldest first. The bounds are UTC
/// instants; the stored text format compares correctly as text.
pub fn load_scans_between(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> AppResult<Vec<ScanEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, worker_id, scan_time, scanned_tag_id, equipment_label, source, created_at
         FROM scans
         WHERE scan_time >= ?1 AND scan_time < ?2
         ORDER BY scan_time ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![to_store(from), to_store(to)], map_scan_row)?;
    let mut out = Vec::new();
    for s in rows {
        out.push(s?);
    }
    Ok(out)
}

pub fn insert_worker(conn: &Connection, worker: &NewWorker) -> AppResult<i64> {
    conn.prepare_cached(
        "INSERT INTO workers (name, position, hat_tag, shirt_tag, boot_tag, glove_tag)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?
    .execute(params![
        worker.name,
        worker.position,
        worker.hat_tag,
        worker.shirt_tag,
        worker.boot_tag,
        worker.glove_tag,
    ])?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_scan(conn: &Connection, scan: &NewScan) -> AppResult<i64> {
    conn.prepare_cached(
        "INSERT INTO scans (worker_id, scan_time, scanned_tag_id, equipment_label, source)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?
    .execute(params![
        scan.worker_id,
        scan.scan_time.as_ref().map(to_store),
        scan.scanned_tag_id,
        scan.equipment_label,
        scan.source,
    ])?;
    Ok(conn.last_insert_rowid())
}

pub fn count_workers(conn: &Connection) -> AppResult<i64> {
    let count = conn
        .prepare_cached("SELECT COUNT(*) FROM workers")?
        .query_row([], |row| row.get(0))?;
    Ok(count)
}

pub fn count_scans(conn: &Connection) -> AppResult<i64> {
    let count = conn
        .prepare_cached("SELECT COUNT(*) FROM scans")?
        .query_row([], |row| row.get(0))?;
    Ok(count)
}

/// Earliest and latest stored scan_time, if any scans carry one.
pub fn scan_time_range(conn: &Connection) -> AppResult<Option<(String, String)>> {
    let range: (Option<String>, Option<String>) = conn
        .prepare_cached("SELECT MIN(scan_time), MAX(scan_time) FROM scans")?
        .query_row([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    match range {
        (Some(min), Some(max)) => Ok(Some((min, max))),
        _ => Ok(None),
    }
}
