//! # anticip8-paths
//!
//! Canonical node paths for the transition model.
//!
//! - [`PathNormalizer`] trims trailing slashes and replaces integer and UUID
//!   segments with `{id}` / `{uuid}` placeholders. Noise paths pass through
//!   untouched.
//! - [`SourceTokens`] records which identifier kinds a raw source path
//!   carries, for destination compatibility filtering.

mod normalizer;
mod patterns;
mod tokens;

pub use normalizer::PathNormalizer;
pub use tokens::SourceTokens;
