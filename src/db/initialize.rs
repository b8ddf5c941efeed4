use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a database (possibly a brand-new empty file) up to the current
/// schema. Safe to call repeatedly.
pub fn init_db(conn: &Connection, is_test: bool) -> AppResult<()> {
    run_pending_migrations(conn, is_test)
}
