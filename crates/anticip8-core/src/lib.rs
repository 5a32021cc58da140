//! # anticip8-core
//!
//! Foundation crate for the anticip8 prefetch policy engine.
//! Defines node identity, policy models, capability traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::Anticip8Config;
pub use errors::{Anticip8Error, Anticip8Result};
pub use models::{NextPath, NodeId, PolicyQuery, PolicyResponse};
