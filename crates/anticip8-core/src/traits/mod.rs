mod artifact_store;
mod counter_store;
mod embedding_source;

pub use artifact_store::{IArtifactStore, IArtifactWriter};
pub use counter_store::{ICounterStore, ICounterWriter};
pub use embedding_source::IEmbeddingSource;
