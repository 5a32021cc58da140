use crate::errors::Anticip8Result;
use crate::models::{EmbeddingCandidate, NodeId};

/// Similar-destination lookup keyed by source node.
pub trait IEmbeddingSource: Send + Sync {
    /// Ranked candidates for `node`. `Ok(vec![])` when no record exists.
    fn candidates(&self, node: &NodeId) -> Anticip8Result<Vec<EmbeddingCandidate>>;

    /// Fail-open lookup: any error yields no candidates.
    fn lookup(&self, node: &NodeId) -> Vec<EmbeddingCandidate> {
        self.candidates(node).unwrap_or_default()
    }
}

impl<T: IEmbeddingSource + ?Sized> IEmbeddingSource for std::sync::Arc<T> {
    fn candidates(&self, node: &NodeId) -> Anticip8Result<Vec<EmbeddingCandidate>> {
        (**self).candidates(node)
    }
}
