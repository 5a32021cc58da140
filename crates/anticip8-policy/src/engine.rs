//! PolicyEngine: normalization, signal gathering, fusion and ranking.

use anticip8_core::config::Anticip8Config;
use anticip8_core::errors::Anticip8Result;
use anticip8_core::models::{
    DegradationEvent, EmbeddingCandidate, NodeId, PolicyQuery, PolicyResponse,
};
use anticip8_core::traits::{ICounterStore, IEmbeddingSource};
use anticip8_markov::gather;
use anticip8_observability::policy_span;
use anticip8_observability::tracing_setup::events;
use anticip8_paths::{PathNormalizer, SourceTokens};

use crate::diagnostics::{PolicyDiagnostics, RankingMode};
use crate::explain::{self, PolicyExplanation};
use crate::{fusion, ranking};

/// Stateless over requests: holds configuration and store handles only.
pub struct PolicyEngine<C: ICounterStore, E: IEmbeddingSource> {
    store: C,
    embeddings: E,
    normalizer: PathNormalizer,
    config: Anticip8Config,
}

impl<C: ICounterStore, E: IEmbeddingSource> PolicyEngine<C, E> {
    pub fn new(store: C, embeddings: E, config: Anticip8Config) -> Self {
        Self {
            store,
            embeddings,
            normalizer: PathNormalizer::new(&config.policy),
            config,
        }
    }

    /// Rank likely next destinations for a query.
    pub fn compute(&self, query: &PolicyQuery) -> Anticip8Result<PolicyResponse> {
        self.compute_with_diagnostics(query).map(|(response, _)| response)
    }

    /// Like [`compute`](Self::compute), also reporting the ranking mode and
    /// any degraded signals.
    ///
    /// Only a query missing `service` or `path` is an error.
    pub fn compute_with_diagnostics(
        &self,
        query: &PolicyQuery,
    ) -> Anticip8Result<(PolicyResponse, PolicyDiagnostics)> {
        query.validate()?;
        let _span = policy_span!(query.service, query.path).entered();

        let normalized = self.normalizer.normalize(&query.path);
        if self.normalizer.is_noise(&query.path) || self.normalizer.is_noise(&normalized) {
            tracing::debug!(path = %query.path, "noise path, empty policy");
            return Ok((PolicyResponse::empty(), PolicyDiagnostics::noise(normalized)));
        }

        let limit = query.effective_limit(self.config.policy.default_limit);
        let source = NodeId::new(query.service.as_str(), normalized.as_str());
        let tokens = SourceTokens::detect(&query.path, &normalized);

        let signals = gather(&self.store, &self.config.policy, &source);
        let mut degraded = signals.degraded;
        let transitions = signals.map;

        let candidates = self.fetch_candidates(&source, &mut degraded);
        let (mode, scored) = if candidates.is_empty() {
            (RankingMode::MarkovOnly, fusion::markov_only(&transitions))
        } else {
            (
                RankingMode::Hybrid,
                fusion::hybrid(
                    &transitions,
                    &candidates,
                    &source,
                    self.config.embeddings.alpha,
                    limit,
                    self.config.policy.drop_self_loops,
                ),
            )
        };

        let next_paths = ranking::rank(scored, &tokens, &self.normalizer, limit);
        events::policy_computed(
            mode.as_str(),
            transitions.len(),
            candidates.len(),
            next_paths.len(),
        );

        let response = if next_paths.is_empty() {
            PolicyResponse::empty()
        } else {
            PolicyResponse {
                next_paths,
                max_prefetch: self.config.policy.max_prefetch,
                max_prefetch_time_ms: self.config.policy.prefetch_budget_ms,
            }
        };
        let diagnostics = PolicyDiagnostics {
            mode,
            normalized_path: normalized,
            transition_count: transitions.len(),
            embedding_count: candidates.len(),
            degraded,
        };
        Ok((response, diagnostics))
    }

    /// Raw counters and candidates behind a source node, for debugging.
    ///
    /// Only a missing `service` or `path` is an error; unreadable signals
    /// are listed in `degraded`.
    pub fn explain(
        &self,
        service: Option<&str>,
        path: Option<&str>,
    ) -> Anticip8Result<PolicyExplanation> {
        let query = PolicyQuery::from_params(service, path, None)?;
        let normalized = self.normalizer.normalize(&query.path);
        let source = NodeId::new(query.service, normalized);
        Ok(explain::build(&self.store, &self.embeddings, source))
    }

    fn fetch_candidates(
        &self,
        source: &NodeId,
        degraded: &mut Vec<DegradationEvent>,
    ) -> Vec<EmbeddingCandidate> {
        match self.embeddings.candidates(source) {
            Ok(candidates) => candidates,
            Err(e) => {
                let event = DegradationEvent::now("embeddings", e.to_string(), "markov only");
                events::degradation_triggered(&event);
                degraded.push(event);
                Vec::new()
            }
        }
    }
}
