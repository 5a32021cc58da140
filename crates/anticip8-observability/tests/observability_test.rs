use anticip8_core::config::ObservabilityConfig;
use anticip8_core::models::DegradationEvent;
use anticip8_observability::tracing_setup::{events, spans::names};
use anticip8_observability::{embedding_span, init_tracing, ingest_span, policy_span};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&ObservabilityConfig {
        json_logs: true,
        ..config
    });
}

#[test]
fn span_names_match_constants() {
    init_tracing(&ObservabilityConfig {
        log_level: "debug".into(),
        json_logs: false,
    });
    let policy = policy_span!("users", "/users/{id}");
    let ingest = ingest_span!("navigation", "users");
    let embedding = embedding_span!("users::/users");
    for (span, name) in [
        (policy, names::POLICY),
        (ingest, names::INGEST),
        (embedding, names::EMBEDDING),
    ] {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}

#[test]
fn events_do_not_panic_without_subscriber() {
    events::degradation_triggered(&DegradationEvent::now("markov", "timeout", "empty table"));
    events::policy_computed("hybrid", 3, 2, 1);
    events::embeddings_published(4, "anticip8:i2v:topk:");
}
