//! Combining transition probabilities with embedding similarity.

use anticip8_core::constants::{INSURANCE_MIN, INSURANCE_PER_LIMIT};
use anticip8_core::models::{EmbeddingCandidate, NodeId};
use anticip8_markov::TransitionMap;

/// Size of the insurance set for a requested limit: `max(5, 3 × limit)`.
pub fn insurance_size(limit: usize) -> usize {
    INSURANCE_MIN.max(INSURANCE_PER_LIMIT.saturating_mul(limit))
}

/// Markov-only scoring: every transition entry at its probability.
pub fn markov_only(transitions: &TransitionMap) -> Vec<(NodeId, f64)> {
    transitions.iter().map(|(n, p)| (n.clone(), p)).collect()
}

/// Hybrid scoring.
///
/// Each embedding candidate scores `α·cos + (1-α)·markov`, with markov 0 for
/// destinations without transitions. The top transitions (see
/// [`insurance_size`]) are then injected at `(1-α)·markov`. Per destination
/// the maximum wins. With `drop_self_loops`, `source` is skipped among the
/// candidates.
pub fn hybrid(
    transitions: &TransitionMap,
    candidates: &[EmbeddingCandidate],
    source: &NodeId,
    alpha: f64,
    limit: usize,
    drop_self_loops: bool,
) -> Vec<(NodeId, f64)> {
    let mut fused = TransitionMap::new();

    for candidate in candidates {
        if drop_self_loops && &candidate.node == source {
            continue;
        }
        let markov = transitions.get(&candidate.node).unwrap_or(0.0);
        fused.merge_max(
            candidate.node.clone(),
            alpha * candidate.score + (1.0 - alpha) * markov,
        );
    }

    for (node, prob) in transitions.ranked().into_iter().take(insurance_size(limit)) {
        fused.merge_max(node, (1.0 - alpha) * prob);
    }

    fused.iter().map(|(n, s)| (n.clone(), s)).collect()
}
