use anticip8_core::config::EmbeddingConfig;
use anticip8_core::errors::Anticip8Result;
use anticip8_core::models::{EmbeddingCandidate, NodeId};
use anticip8_core::traits::{IArtifactStore, IEmbeddingSource};
use anticip8_observability::embedding_span;

use crate::{artifact_key, payload};

/// Embedding candidates backed by an artifact store.
///
/// A missing record and a malformed payload both yield no candidates. Store
/// errors are returned so the caller can record the degradation.
pub struct I2vCandidateSource<A: IArtifactStore> {
    store: A,
    key_prefix: String,
    top_k: usize,
}

impl<A: IArtifactStore> I2vCandidateSource<A> {
    pub fn new(store: A, config: &EmbeddingConfig) -> Self {
        Self {
            store,
            key_prefix: config.key_prefix.clone(),
            top_k: config.top_k,
        }
    }
}

impl<A: IArtifactStore> IEmbeddingSource for I2vCandidateSource<A> {
    fn candidates(&self, node: &NodeId) -> Anticip8Result<Vec<EmbeddingCandidate>> {
        let _span = embedding_span!(node).entered();
        if self.top_k == 0 {
            return Ok(Vec::new());
        }

        let key = artifact_key(&self.key_prefix, node);
        let Some(raw) = self.store.get_artifact(&key)? else {
            return Ok(Vec::new());
        };

        match payload::parse_payload(&key, &raw, self.top_k) {
            Ok(candidates) => {
                tracing::debug!(
                    key = %key,
                    count = candidates.len(),
                    "embedding candidates loaded"
                );
                Ok(candidates)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "malformed embedding payload, ignoring");
                Ok(Vec::new())
            }
        }
    }
}
