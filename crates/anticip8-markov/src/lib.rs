//! # anticip8-markov
//!
//! Transition probabilities from raw counters.
//!
//! | Signal | Estimator |
//! |--------|-----------|
//! | Same-service transitions | `(count + α) / (total + α·k)` |
//! | Cross-service transitions | `(count + α) / (total + α·k)` |
//! | Prefetch attempts (opt-in) | `count / total × weight` |
//!
//! Probabilities below the floor are dropped. When a destination appears in
//! several signals the highest probability wins.

pub mod count_table;
pub mod estimator;
pub mod signals;
pub mod transition_map;

pub use count_table::CountTable;
pub use signals::{gather, TransitionSignals};
pub use transition_map::TransitionMap;
