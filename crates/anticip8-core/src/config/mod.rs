//! Configuration for every subsystem, loaded from TOML.
//!
//! Every section uses `#[serde(default)]`, so a partial file overrides only
//! the keys it names.

pub mod defaults;
mod embedding_config;
mod observability_config;
mod policy_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use storage_config::StorageConfig;

use crate::errors::{Anticip8Error, Anticip8Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Anticip8Config {
    pub policy: PolicyConfig,
    pub embeddings: EmbeddingConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl Anticip8Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Anticip8Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Anticip8Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Anticip8Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Anticip8Error::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Reject values the estimator and fusion stages cannot work with.
    pub fn validate(&self) -> Anticip8Result<()> {
        let p = &self.policy;
        if !p.markov_smooth.is_finite() || p.markov_smooth < 0.0 {
            return Err(invalid("policy.markov_smooth", "must be a finite value >= 0"));
        }
        unit_interval("policy.min_prob", p.min_prob)?;
        unit_interval("policy.prefetch_attempt_weight", p.prefetch_attempt_weight)?;
        unit_interval("embeddings.alpha", self.embeddings.alpha)?;
        if self.embeddings.key_prefix.is_empty() {
            return Err(invalid("embeddings.key_prefix", "must not be empty"));
        }
        if p.noise_prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(invalid("policy.noise_prefixes", "entries must not be empty"));
        }
        Ok(())
    }
}

fn unit_interval(field: &str, value: f64) -> Anticip8Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must lie in [0, 1]"))
    }
}

fn invalid(field: &str, reason: &str) -> Anticip8Error {
    Anticip8Error::ConfigError(format!("{field} {reason}"))
}
