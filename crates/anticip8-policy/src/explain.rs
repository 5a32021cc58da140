//! Debug view of the raw signals behind one source node.

use std::collections::HashMap;

use serde::Serialize;

use anticip8_core::constants::EXPLAIN_TOP_N;
use anticip8_core::models::{DegradationEvent, EmbeddingCandidate, Namespace, NodeId};
use anticip8_core::traits::{ICounterStore, IEmbeddingSource};
use anticip8_observability::tracing_setup::events;

/// A raw hash field with its count. Non-numeric counts read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCount {
    pub field: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyExplanation {
    pub service: String,
    pub normalized_path: String,
    pub same_service_fields: usize,
    pub cross_service_fields: usize,
    pub top_same_service: Vec<FieldCount>,
    pub top_cross_service: Vec<FieldCount>,
    pub embeddings: Vec<EmbeddingCandidate>,
    /// Reads that failed and were reported as empty.
    pub degraded: Vec<DegradationEvent>,
}

/// Unreadable tables and payloads are reported empty, never as an error.
pub(crate) fn build(
    store: &impl ICounterStore,
    embeddings: &impl IEmbeddingSource,
    source: NodeId,
) -> PolicyExplanation {
    let mut degraded = Vec::new();
    let same = read_table(store, Namespace::SameService, &source, &mut degraded);
    let cross = read_table(store, Namespace::CrossService, &source, &mut degraded);
    let mut candidates = match embeddings.candidates(&source) {
        Ok(candidates) => candidates,
        Err(e) => {
            degraded.push(report("explain.embeddings", &e.to_string()));
            Vec::new()
        }
    };
    candidates.truncate(EXPLAIN_TOP_N);

    PolicyExplanation {
        same_service_fields: same.len(),
        cross_service_fields: cross.len(),
        top_same_service: top_fields(&same),
        top_cross_service: top_fields(&cross),
        embeddings: candidates,
        degraded,
        service: source.service,
        normalized_path: source.path,
    }
}

fn read_table(
    store: &impl ICounterStore,
    namespace: Namespace,
    source: &NodeId,
    degraded: &mut Vec<DegradationEvent>,
) -> HashMap<String, String> {
    store.get_transitions(namespace, source).unwrap_or_else(|e| {
        degraded.push(report(&format!("explain.{}", namespace.name()), &e.to_string()));
        HashMap::new()
    })
}

fn report(component: &str, failure: &str) -> DegradationEvent {
    let event = DegradationEvent::now(component, failure, "empty table");
    events::degradation_triggered(&event);
    event
}

/// Highest counts first, ties by field name.
fn top_fields(raw: &HashMap<String, String>) -> Vec<FieldCount> {
    let mut fields: Vec<FieldCount> = raw
        .iter()
        .map(|(field, value)| FieldCount {
            field: field.clone(),
            count: value.trim().parse().unwrap_or(0),
        })
        .collect();
    fields.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.field.cmp(&b.field)));
    fields.truncate(EXPLAIN_TOP_N);
    fields
}
