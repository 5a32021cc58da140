use serde::{Deserialize, Serialize};
use serde_json::Value;

use anticip8_core::errors::{Anticip8Result, EmbeddingError};
use anticip8_core::models::{EmbeddingCandidate, NodeId};

/// One published neighbour, in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadEntry {
    pub item: String,
    pub cos: f64,
}

impl From<&EmbeddingCandidate> for PayloadEntry {
    fn from(candidate: &EmbeddingCandidate) -> Self {
        Self {
            item: candidate.node.to_node_key(),
            cos: candidate.score,
        }
    }
}

/// Parse a top-K payload, keeping at most `top_k` entries in published order.
///
/// A payload that is not a JSON array is an error. Inside the array, entries
/// with an empty or unsplittable `item`, or a missing or non-numeric `cos`,
/// are skipped; they still count towards `top_k`.
pub fn parse_payload(
    key: &str,
    raw: &str,
    top_k: usize,
) -> Anticip8Result<Vec<EmbeddingCandidate>> {
    let entries: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| EmbeddingError::MalformedPayload {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

    Ok(entries
        .iter()
        .take(top_k)
        .filter_map(parse_entry)
        .collect())
}

fn parse_entry(entry: &Value) -> Option<EmbeddingCandidate> {
    let item = entry.get("item")?.as_str()?;
    if item.is_empty() {
        return None;
    }
    let node = NodeId::from_node_key(item)?;
    let score = entry.get("cos")?.as_f64()?;
    score.is_finite().then_some(EmbeddingCandidate { node, score })
}
