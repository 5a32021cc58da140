use serde::{Deserialize, Serialize};

/// The three independent counter families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Transitions within one service. Hash fields are bare destination paths.
    SameService,
    /// Transitions across services. Hash fields are packed `service|path`.
    CrossService,
    /// Prefetch attempts issued by clients. Hash fields are packed `service|path`.
    PrefetchAttempt,
}

impl Namespace {
    fn transitions_prefix(self) -> &'static str {
        match self {
            Namespace::SameService => "trans",
            Namespace::CrossService => "trans2",
            Namespace::PrefetchAttempt => "ptrans",
        }
    }

    fn totals_prefix(self) -> &'static str {
        match self {
            Namespace::SameService => "tot",
            Namespace::CrossService => "tot2",
            Namespace::PrefetchAttempt => "ptot",
        }
    }

    /// Key of the transition hash for a source node.
    pub fn transitions_key(self, service: &str, path: &str) -> String {
        format!("{}:{service}:{path}", self.transitions_prefix())
    }

    /// Key of the totals hash for a service; fields are source paths.
    pub fn totals_key(self, service: &str) -> String {
        format!("{}:{service}", self.totals_prefix())
    }

    /// Whether hash fields carry the destination service.
    pub fn packs_service(self) -> bool {
        !matches!(self, Namespace::SameService)
    }

    pub fn name(self) -> &'static str {
        match self {
            Namespace::SameService => "same_service",
            Namespace::CrossService => "cross_service",
            Namespace::PrefetchAttempt => "prefetch_attempt",
        }
    }
}
