//! Placeholder compatibility between a source request and a destination.

use anticip8_core::models::NodeId;
use anticip8_paths::SourceTokens;

/// A destination with `{id}` needs an integer-like source segment, and one
/// with `{uuid}` needs a UUID-like source segment.
pub fn is_compatible(tokens: &SourceTokens, destination: &NodeId) -> bool {
    tokens.admits(&destination.path)
}
