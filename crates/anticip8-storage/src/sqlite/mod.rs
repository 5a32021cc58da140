//! SQLite-backed counter store.

mod queries;
mod schema;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use anticip8_core::config::StorageConfig;
use anticip8_core::errors::{Anticip8Result, StoreError};
use anticip8_core::models::{Namespace, NodeId};
use anticip8_core::traits::{IArtifactStore, IArtifactWriter, ICounterStore, ICounterWriter};

use crate::to_storage_err;

/// Counter and artifact store over a single SQLite connection.
pub struct SqliteCounterStore {
    conn: Mutex<Connection>,
}

impl SqliteCounterStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path, config: &StorageConfig) -> Anticip8Result<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        let store = Self::initialize(conn, config)?;
        tracing::info!(path = %path.display(), "counter store opened");
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Anticip8Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        let config = StorageConfig {
            wal_mode: false,
            ..StorageConfig::default()
        };
        Self::initialize(conn, &config)
    }

    fn initialize(conn: Connection, config: &StorageConfig) -> Anticip8Result<Self> {
        schema::apply_pragmas(&conn, config)?;
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Anticip8Result<T>
    where
        F: FnOnce(&mut Connection) -> Anticip8Result<T>,
    {
        let mut guard = self.conn.lock().map_err(|e| StoreError::LockPoisoned {
            context: format!("sqlite connection: {e}"),
        })?;
        f(&mut guard)
    }

    /// Overwrite a raw hash field.
    pub fn set_field(&self, key: &str, field: &str, value: &str) -> Anticip8Result<()> {
        self.with_conn(|conn| queries::set_field(conn, key, field, value))
    }

    /// Raw field table of `key`.
    pub fn get_hash(&self, key: &str) -> Anticip8Result<HashMap<String, String>> {
        self.with_conn(|conn| queries::get_hash(conn, key))
    }
}

impl ICounterStore for SqliteCounterStore {
    fn get_transitions(
        &self,
        namespace: Namespace,
        source: &NodeId,
    ) -> Anticip8Result<HashMap<String, String>> {
        self.get_hash(&namespace.transitions_key(&source.service, &source.path))
    }

    fn get_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<Option<String>> {
        let key = namespace.totals_key(&source.service);
        self.with_conn(|conn| queries::get_field(conn, &key, &source.path))
    }
}

impl ICounterWriter for SqliteCounterStore {
    fn increment_transition(
        &self,
        namespace: Namespace,
        source: &NodeId,
        field: &str,
    ) -> Anticip8Result<()> {
        let key = namespace.transitions_key(&source.service, &source.path);
        self.with_conn(|conn| queries::increment_field(conn, &key, field))
    }

    fn increment_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<()> {
        let key = namespace.totals_key(&source.service);
        self.with_conn(|conn| queries::increment_field(conn, &key, &source.path))
    }
}

impl IArtifactStore for SqliteCounterStore {
    fn get_artifact(&self, key: &str) -> Anticip8Result<Option<String>> {
        self.with_conn(|conn| queries::get_artifact(conn, key))
    }
}

impl IArtifactWriter for SqliteCounterStore {
    fn put_artifact(&self, key: &str, payload: &str) -> Anticip8Result<()> {
        self.with_conn(|conn| queries::put_artifact(conn, key, payload))
    }
}
