mod degradation_event;
mod embedding_candidate;
mod events;
mod namespace;
mod next_path;
mod node;
mod policy_query;
mod score_order;

pub use degradation_event::DegradationEvent;
pub use embedding_candidate::EmbeddingCandidate;
pub use events::{EdgeEvent, NavigationEvent};
pub use namespace::Namespace;
pub use next_path::{NextPath, PolicyResponse};
pub use node::NodeId;
pub use policy_query::PolicyQuery;
pub use score_order::score_order;
