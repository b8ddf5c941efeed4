use rusqlite::{Connection, Result};

/// Thin owner of the SQLite connection. One per process for the CLI;
/// HTTP handlers open one per request since Connection is not Sync.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(DbPool { conn })
    }
}
