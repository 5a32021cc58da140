use std::cmp::Ordering;

use super::NodeId;

/// Ranking order: score descending, then node identity ascending.
pub fn score_order(a: (&NodeId, f64), b: (&NodeId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
