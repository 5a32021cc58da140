//! # anticip8-embeddings
//!
//! Precomputed item-to-item neighbours. An offline job publishes, per source
//! node, a JSON array of `{"item": "<service>::<path>", "cos": <float>}`
//! under `<prefix><service>::<path>`. This crate reads those payloads back as
//! ranked [`EmbeddingCandidate`](anticip8_core::models::EmbeddingCandidate)s
//! and publishes new ones.

pub mod payload;
pub mod publisher;
pub mod source;

pub use payload::{parse_payload, PayloadEntry};
pub use publisher::publish_all;
pub use source::I2vCandidateSource;

/// Artifact key of the payload for `node`.
pub fn artifact_key(prefix: &str, node: &anticip8_core::NodeId) -> String {
    format!("{prefix}{}", node.to_node_key())
}
