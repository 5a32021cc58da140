//! # anticip8-policy
//!
//! Given a source `(service, path)`, rank the destinations a client is most
//! likely to request next.
//!
//! 1. Normalize the path; noise paths short-circuit to an empty result.
//! 2. Gather transition probabilities from the counter store.
//! 3. Fetch embedding candidates. None → Markov-only ranking, otherwise
//!    hybrid fusion with an insurance set of top transitions.
//! 4. Drop non-finite scores, sort, filter destinations whose placeholders
//!    the source cannot fill, truncate.

pub mod diagnostics;
pub mod engine;
pub mod explain;
pub mod filter;
pub mod fusion;
pub mod ranking;

pub use diagnostics::{PolicyDiagnostics, RankingMode};
pub use engine::PolicyEngine;
pub use explain::{FieldCount, PolicyExplanation};
