use anticip8_core::constants::{ID_PLACEHOLDER, UUID_PLACEHOLDER};

use crate::patterns::{self, INT_TOKEN, UUID_TOKEN};

/// Identifier kinds a source request can supply to a destination template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceTokens {
    pub has_id: bool,
    pub has_uuid: bool,
}

impl SourceTokens {
    /// Detect tokens from the raw source path, falling back to placeholders
    /// already present in its normalized form.
    pub fn detect(raw: &str, normalized: &str) -> Self {
        Self {
            has_id: patterns::matches(&INT_TOKEN, raw) || normalized.contains(ID_PLACEHOLDER),
            has_uuid: patterns::matches(&UUID_TOKEN, raw) || normalized.contains(UUID_PLACEHOLDER),
        }
    }

    /// Whether a destination path's placeholders can all be filled.
    pub fn admits(&self, destination_path: &str) -> bool {
        if destination_path.contains(ID_PLACEHOLDER) && !self.has_id {
            return false;
        }
        if destination_path.contains(UUID_PLACEHOLDER) && !self.has_uuid {
            return false;
        }
        true
    }
}
