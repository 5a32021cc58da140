use anticip8_core::models::{score_order, NextPath, NodeId};
use anticip8_paths::{PathNormalizer, SourceTokens};

use crate::filter::is_compatible;

/// Final ranking: drop non-finite scores, sort descending (ties by node),
/// filter noise and incompatible destinations, then truncate to `limit`.
pub fn rank(
    scored: impl IntoIterator<Item = (NodeId, f64)>,
    tokens: &SourceTokens,
    normalizer: &PathNormalizer,
    limit: usize,
) -> Vec<NextPath> {
    let mut entries: Vec<(NodeId, f64)> = scored
        .into_iter()
        .filter(|(_, score)| score.is_finite())
        .collect();
    entries.sort_by(|a, b| score_order((&a.0, a.1), (&b.0, b.1)));

    entries
        .into_iter()
        .filter(|(node, _)| !normalizer.is_noise(&node.path))
        .filter(|(node, _)| is_compatible(tokens, node))
        .take(limit)
        .map(|(node, score)| NextPath::from_node(node, score))
        .collect()
}
