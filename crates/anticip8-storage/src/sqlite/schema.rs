//! Table layout and connection pragmas.

use rusqlite::Connection;

use anticip8_core::config::StorageConfig;
use anticip8_core::errors::Anticip8Result;

use crate::to_storage_err;

/// Apply journal and timeout pragmas. The busy timeout bounds every call.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> Anticip8Result<()> {
    if config.wal_mode {
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(
        config.busy_timeout_ms,
    )))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Create the counter and artifact tables if missing.
pub fn create_tables(conn: &Connection) -> Anticip8Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS counters (
            key   TEXT NOT NULL,
            field TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (key, field)
        ) WITHOUT ROWID;

        CREATE TABLE IF NOT EXISTS artifacts (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
