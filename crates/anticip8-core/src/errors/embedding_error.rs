/// Embedding artifact errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("malformed payload for {key}: {reason}")]
    MalformedPayload { key: String, reason: String },

    #[error("malformed node key: {value}")]
    MalformedNode { value: String },
}
