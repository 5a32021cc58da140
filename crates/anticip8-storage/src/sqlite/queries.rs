//! Hash-field and artifact queries.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use anticip8_core::errors::Anticip8Result;

use crate::{incremented, to_storage_err};

/// All fields of the hash stored under `key`.
pub fn get_hash(conn: &Connection, key: &str) -> Anticip8Result<HashMap<String, String>> {
    let mut stmt = conn
        .prepare_cached("SELECT field, value FROM counters WHERE key = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![key], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut fields = HashMap::new();
    for row in rows {
        let (field, value) = row.map_err(|e| to_storage_err(e.to_string()))?;
        fields.insert(field, value);
    }
    Ok(fields)
}

/// One field of the hash stored under `key`.
pub fn get_field(conn: &Connection, key: &str, field: &str) -> Anticip8Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM counters WHERE key = ?1 AND field = ?2",
        params![key, field],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Overwrite one hash field.
pub fn set_field(conn: &Connection, key: &str, field: &str, value: &str) -> Anticip8Result<()> {
    conn.execute(
        "INSERT INTO counters (key, field, value) VALUES (?1, ?2, ?3)
         ON CONFLICT (key, field) DO UPDATE SET value = excluded.value",
        params![key, field, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Add one to a hash field inside an immediate transaction.
pub fn increment_field(conn: &mut Connection, key: &str, field: &str) -> Anticip8Result<()> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let existing = get_field(&tx, key, field)?;
    set_field(&tx, key, field, &incremented(existing.as_deref()))?;
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_artifact(conn: &Connection, key: &str) -> Anticip8Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM artifacts WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn put_artifact(conn: &Connection, key: &str, value: &str) -> Anticip8Result<()> {
    conn.execute(
        "INSERT INTO artifacts (key, value) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
