//! Structured log events for key operations.

use anticip8_core::models::DegradationEvent;

/// Log a signal that degraded to "absent".
pub fn degradation_triggered(event: &DegradationEvent) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %event.component,
        failure = %event.failure,
        fallback = %event.fallback_used,
        "degradation triggered"
    );
}

/// Log the outcome of a policy computation.
pub fn policy_computed(mode: &str, transitions: usize, embeddings: usize, returned: usize) {
    tracing::debug!(
        event = "policy_computed",
        mode = mode,
        transitions = transitions,
        embeddings = embeddings,
        returned = returned,
        "policy computed"
    );
}

/// Log a batch of embedding payloads published to the artifact store.
pub fn embeddings_published(nodes: usize, prefix: &str) {
    tracing::info!(
        event = "embeddings_published",
        nodes = nodes,
        prefix = %prefix,
        "embedding payloads published"
    );
}
