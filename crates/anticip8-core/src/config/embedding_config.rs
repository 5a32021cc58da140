use serde::{Deserialize, Serialize};

use super::defaults;

/// Item-to-item embedding signal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Key prefix under which top-K payloads are published.
    pub key_prefix: String,
    /// Blend weight α given to cosine similarity in hybrid fusion.
    pub alpha: f64,
    /// Maximum number of candidates read from a payload.
    pub top_k: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            key_prefix: defaults::DEFAULT_I2V_PREFIX.to_string(),
            alpha: defaults::DEFAULT_I2V_ALPHA,
            top_k: defaults::DEFAULT_I2V_TOPK,
        }
    }
}
