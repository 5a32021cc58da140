use anticip8_core::config::{defaults, PolicyConfig};
use anticip8_core::constants::{ID_PLACEHOLDER, UUID_PLACEHOLDER};

use crate::patterns::{self, INT_SEGMENT, UUID_SEGMENT};

/// Canonicalizes raw request paths into node paths.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    noise_prefixes: Vec<String>,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::with_prefixes(
            defaults::DEFAULT_NOISE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }
}

impl PathNormalizer {
    pub fn new(config: &PolicyConfig) -> Self {
        Self::with_prefixes(config.noise_prefixes.clone())
    }

    pub fn with_prefixes(noise_prefixes: Vec<String>) -> Self {
        Self { noise_prefixes }
    }

    /// Whether `path` starts with a non-navigational prefix.
    pub fn is_noise(&self, path: &str) -> bool {
        self.noise_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Normalize a raw path.
    ///
    /// Empty and noise paths are returned unchanged. Otherwise trailing
    /// slashes are trimmed (the root stays `/`), then every segment after the
    /// first separator that is a UUID becomes `{uuid}` and every all-digit
    /// segment becomes `{id}`. Separators are preserved.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() || self.is_noise(raw) {
            return raw.to_string();
        }

        let trimmed = match raw.trim_end_matches('/') {
            "" => "/",
            rest => rest,
        };

        let mut out = String::with_capacity(trimmed.len());
        for (i, segment) in trimmed.split('/').enumerate() {
            if i == 0 {
                out.push_str(segment);
                continue;
            }
            out.push('/');
            if patterns::matches(&UUID_SEGMENT, segment) {
                out.push_str(UUID_PLACEHOLDER);
            } else if patterns::matches(&INT_SEGMENT, segment) {
                out.push_str(ID_PLACEHOLDER);
            } else {
                out.push_str(segment);
            }
        }
        out
    }
}
