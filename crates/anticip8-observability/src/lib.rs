//! # anticip8-observability
//!
//! Structured tracing for policy computation, ingestion and embedding lookup.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
