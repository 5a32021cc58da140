//! Publishing of top-K payloads, one artifact per source node.

use std::collections::BTreeMap;

use anticip8_core::errors::{Anticip8Result, EmbeddingError};
use anticip8_core::models::NodeId;
use anticip8_core::traits::IArtifactWriter;
use anticip8_observability::tracing_setup::events;

use crate::artifact_key;
use crate::payload::PayloadEntry;

/// Publish every list of `lists`, keyed by `service::path` source node.
///
/// Fails on the first source key that is not a node key; nothing after it is
/// written. Returns the number of payloads written.
pub fn publish_all(
    writer: &impl IArtifactWriter,
    prefix: &str,
    lists: &BTreeMap<String, Vec<PayloadEntry>>,
) -> Anticip8Result<usize> {
    let mut written = 0;
    for (source, entries) in lists {
        let node = NodeId::from_node_key(source).ok_or_else(|| EmbeddingError::MalformedNode {
            value: source.clone(),
        })?;
        let payload = serde_json::to_string(entries)?;
        writer.put_artifact(&artifact_key(prefix, &node), &payload)?;
        written += 1;
    }
    events::embeddings_published(written, prefix);
    Ok(written)
}
