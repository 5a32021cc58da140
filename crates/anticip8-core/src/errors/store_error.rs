/// Counter-store and artifact-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("lock poisoned: {context}")]
    LockPoisoned { context: String },
}
