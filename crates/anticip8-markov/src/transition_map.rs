use std::collections::HashMap;

use anticip8_core::models::{score_order, NodeId};

/// Destination → probability, combined across signals by maximum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionMap {
    probs: HashMap<NodeId, f64>,
}

impl TransitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `prob` for `node`, keeping the larger value if one exists.
    pub fn merge_max(&mut self, node: NodeId, prob: f64) {
        self.probs
            .entry(node)
            .and_modify(|p| {
                if prob > *p {
                    *p = prob;
                }
            })
            .or_insert(prob);
    }

    pub fn extend_max(&mut self, entries: impl IntoIterator<Item = (NodeId, f64)>) {
        for (node, prob) in entries {
            self.merge_max(node, prob);
        }
    }

    pub fn get(&self, node: &NodeId) -> Option<f64> {
        self.probs.get(node).copied()
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.probs.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.probs.iter().map(|(n, p)| (n, *p))
    }

    /// Entries by descending probability, ties broken by node order.
    pub fn ranked(&self) -> Vec<(NodeId, f64)> {
        let mut entries: Vec<(NodeId, f64)> =
            self.probs.iter().map(|(n, p)| (n.clone(), *p)).collect();
        entries.sort_by(|a, b| score_order((&a.0, a.1), (&b.0, b.1)));
        entries
    }
}

impl FromIterator<(NodeId, f64)> for TransitionMap {
    fn from_iter<I: IntoIterator<Item = (NodeId, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend_max(iter);
        map
    }
}
