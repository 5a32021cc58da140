//! Count-to-probability estimators.

use anticip8_core::models::NodeId;

use crate::count_table::CountTable;

/// Additive smoothing: `(count + α) / (total + α·k)`, `k` distinct destinations.
///
/// α = 0 is plain relative frequency. Empty and zero-total tables produce
/// nothing. Non-finite results and results below `floor` are dropped.
pub fn smoothed(table: &CountTable, alpha: f64, floor: f64) -> Vec<(NodeId, f64)> {
    if table.total == 0 || table.is_empty() {
        return Vec::new();
    }
    let alpha = alpha.max(0.0);
    let denominator = table.total as f64 + alpha * table.distinct() as f64;

    table
        .counts
        .iter()
        .filter_map(|(node, count)| {
            let prob = (*count as f64 + alpha) / denominator;
            keep(prob, floor).then(|| (node.clone(), prob))
        })
        .collect()
}

/// Discounted relative frequency: `count / total × weight`.
///
/// Used for prefetch attempts, which are a weaker proxy for navigation than
/// observed transitions. `total` is the source's totals counter.
pub fn discounted(table: &CountTable, total: u64, weight: f64, floor: f64) -> Vec<(NodeId, f64)> {
    if total == 0 {
        return Vec::new();
    }
    table
        .counts
        .iter()
        .filter_map(|(node, count)| {
            let prob = (*count as f64 / total as f64) * weight;
            keep(prob, floor).then(|| (node.clone(), prob))
        })
        .collect()
}

fn keep(prob: f64, floor: f64) -> bool {
    prob.is_finite() && prob >= floor
}
