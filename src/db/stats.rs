use crate::db::queries;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;

const CYAN: &str = "\x1b[36m";
const GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Print a short summary of the database: file size, row counts, and the
/// span of recorded scan times.
pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    let size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let workers = queries::count_workers(conn)?;
    let scans = queries::count_scans(conn)?;

    println!("{CYAN}Database{RESET} {db_path}");
    println!("  • size:    {} bytes", size);
    println!("  • workers: {workers}");
    println!("  • scans:   {scans}");
    match queries::scan_time_range(conn)? {
        Some((min, max)) => println!("  • span:    {min} {GREY}→{RESET} {max} (UTC)"),
        None => println!("  • span:    {GREY}no timestamped scans{RESET}"),
    }
    Ok(())
}

/// Run SQLite's integrity check. Returns the verdict string ("ok" when
/// the file is healthy).
pub fn integrity_check(conn: &Connection) -> AppResult<String> {
    let verdict: String = conn
        .prepare("PRAGMA integrity_check")?
        .query_row([], |row| row.get(0))?;
    Ok(verdict)
}
