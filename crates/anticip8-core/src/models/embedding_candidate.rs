use serde::{Deserialize, Serialize};

use super::NodeId;

/// A destination suggested by the similarity model, with its cosine score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingCandidate {
    pub node: NodeId,
    pub score: f64,
}
