//! Span definitions per operation: policy, ingestion, embedding lookup.

/// Create a policy computation span.
#[macro_export]
macro_rules! policy_span {
    ($service:expr, $path:expr) => {
        tracing::debug_span!("anticip8.policy", service = %$service, path = %$path)
    };
}

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($kind:expr, $service:expr) => {
        tracing::debug_span!("anticip8.ingest", kind = %$kind, service = %$service)
    };
}

/// Create an embedding lookup span.
#[macro_export]
macro_rules! embedding_span {
    ($node:expr) => {
        tracing::debug_span!("anticip8.embedding", node = %$node)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const POLICY: &str = "anticip8.policy";
    pub const INGEST: &str = "anticip8.ingest";
    pub const EMBEDDING: &str = "anticip8.embedding";
}
