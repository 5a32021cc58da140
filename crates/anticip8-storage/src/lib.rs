//! # anticip8-storage
//!
//! Counter stores behind the `ICounterStore` / `ICounterWriter` /
//! `IArtifactStore` traits, and the ingestion path that feeds them.
//!
//! | Store | Backing |
//! |-------|---------|
//! | [`MemoryCounterStore`] | `DashMap`, process-local |
//! | [`SqliteCounterStore`] | SQLite file or in-memory database |
//!
//! Values are kept as strings, the way an external key-value store holds
//! them, so corrupt values reach the read path and are ignored there.

pub mod ingest;
pub mod memory_store;
pub mod sqlite;

pub use ingest::{IngestOutcome, Ingestor};
pub use memory_store::MemoryCounterStore;
pub use sqlite::SqliteCounterStore;

use anticip8_core::errors::{Anticip8Error, StoreError};

/// Convert a SQLite error message into a store error.
pub(crate) fn to_storage_err(message: String) -> Anticip8Error {
    StoreError::SqliteError { message }.into()
}

/// Next value of a counter. A missing or non-numeric value counts as zero.
pub(crate) fn incremented(existing: Option<&str>) -> String {
    let current = existing
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);
    current.saturating_add(1).to_string()
}
