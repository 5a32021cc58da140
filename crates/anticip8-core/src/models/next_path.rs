use serde::{Deserialize, Serialize};

use super::NodeId;

/// One ranked prefetch candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextPath {
    pub service: String,
    pub path: String,
    pub score: f64,
}

impl NextPath {
    pub fn from_node(node: NodeId, score: f64) -> Self {
        Self {
            service: node.service,
            path: node.path,
            score,
        }
    }
}

/// Result of a policy computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub next_paths: Vec<NextPath>,
    /// How many of `next_paths` the caller should actually prefetch.
    pub max_prefetch: u32,
    /// Time budget for prefetching, in milliseconds.
    pub max_prefetch_time_ms: u32,
}

impl PolicyResponse {
    /// An explicit empty result with zeroed hints.
    pub fn empty() -> Self {
        Self {
            next_paths: Vec::new(),
            max_prefetch: 0,
            max_prefetch_time_ms: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.next_paths.is_empty()
    }
}
