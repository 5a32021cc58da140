use serde::{Deserialize, Serialize};

use super::defaults;

/// Transition-model and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Additive smoothing constant α applied to transition counts.
    pub markov_smooth: f64,
    /// Probabilities below this floor are discarded.
    pub min_prob: f64,
    /// Exclude the source node from its own destinations.
    pub drop_self_loops: bool,
    /// Consult prefetch-attempt counts as a weak hint.
    pub allow_prefetch_attempts: bool,
    /// Discount applied to prefetch-attempt relative frequencies.
    pub prefetch_attempt_weight: f64,
    /// Hint: how many of the returned paths to actually prefetch.
    pub max_prefetch: u32,
    /// Hint: time budget for prefetching, in milliseconds.
    pub prefetch_budget_ms: u32,
    /// Result limit used when a query names none.
    pub default_limit: usize,
    /// Non-navigational path prefixes.
    pub noise_prefixes: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            markov_smooth: defaults::DEFAULT_MARKOV_SMOOTH,
            min_prob: defaults::DEFAULT_MIN_PROB,
            drop_self_loops: defaults::DEFAULT_DROP_SELF_LOOPS,
            allow_prefetch_attempts: defaults::DEFAULT_ALLOW_PREFETCH_ATTEMPTS,
            prefetch_attempt_weight: defaults::DEFAULT_PREFETCH_ATTEMPT_WEIGHT,
            max_prefetch: defaults::DEFAULT_MAX_PREFETCH,
            prefetch_budget_ms: defaults::DEFAULT_PREFETCH_BUDGET_MS,
            default_limit: defaults::DEFAULT_POLICY_LIMIT,
            noise_prefixes: defaults::DEFAULT_NOISE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
