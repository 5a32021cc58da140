//! Error taxonomy. Subsystem enums fold into [`Anticip8Error`].

mod embedding_error;
mod policy_error;
mod store_error;

pub use embedding_error::EmbeddingError;
pub use policy_error::PolicyError;
pub use store_error::StoreError;

/// Top-level error for every anticip8 crate.
#[derive(Debug, thiserror::Error)]
pub enum Anticip8Error {
    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    PolicyError(#[from] PolicyError),

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Anticip8Result<T> = Result<T, Anticip8Error>;
