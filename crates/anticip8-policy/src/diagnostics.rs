use serde::Serialize;

use anticip8_core::models::DegradationEvent;

/// Which ranking path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Source path was noise; nothing was read.
    Noise,
    /// No embedding candidates; transitions only.
    MarkovOnly,
    /// Embedding candidates fused with transitions.
    Hybrid,
}

impl RankingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RankingMode::Noise => "noise",
            RankingMode::MarkovOnly => "markov_only",
            RankingMode::Hybrid => "hybrid",
        }
    }
}

/// What happened while computing one response.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDiagnostics {
    pub mode: RankingMode,
    pub normalized_path: String,
    /// Destinations with a transition probability above the floor.
    pub transition_count: usize,
    pub embedding_count: usize,
    /// Signals that failed and were treated as absent.
    pub degraded: Vec<DegradationEvent>,
}

impl PolicyDiagnostics {
    pub(crate) fn noise(normalized_path: String) -> Self {
        Self {
            mode: RankingMode::Noise,
            normalized_path,
            transition_count: 0,
            embedding_count: 0,
            degraded: Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
