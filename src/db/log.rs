use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

/// One row of the internal activity log.
#[derive(Debug)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: Option<String>,
    pub message: Option<String>,
}

/// Append an entry to the internal log table.
pub fn ttlog(
    conn: &Connection,
    operation: &str,
    target: Option<&str>,
    message: Option<&str>,
) -> AppResult<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![now, operation, target, message])?;
    Ok(())
}

pub fn read_log(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for entry in rows {
        out.push(entry?);
    }
    Ok(out)
}
