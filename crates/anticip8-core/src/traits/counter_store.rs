use std::collections::HashMap;

use crate::errors::Anticip8Result;
use crate::models::{Namespace, NodeId};

/// Read access to transition counters.
///
/// Values are returned raw. Callers tolerate non-numeric and negative values
/// by ignoring them.
pub trait ICounterStore: Send + Sync {
    /// All destination fields observed from `source` in `namespace`.
    fn get_transitions(
        &self,
        namespace: Namespace,
        source: &NodeId,
    ) -> Anticip8Result<HashMap<String, String>>;

    /// The paired totals counter for `source` in `namespace`.
    fn get_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<Option<String>>;
}

/// Write access to transition counters, used only by ingestion.
pub trait ICounterWriter: Send + Sync {
    /// Atomically add one to `field` of the transition hash of `source`.
    fn increment_transition(
        &self,
        namespace: Namespace,
        source: &NodeId,
        field: &str,
    ) -> Anticip8Result<()>;

    /// Atomically add one to the totals counter of `source`.
    fn increment_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<()>;
}

impl<T: ICounterStore + ?Sized> ICounterStore for std::sync::Arc<T> {
    fn get_transitions(
        &self,
        namespace: Namespace,
        source: &NodeId,
    ) -> Anticip8Result<HashMap<String, String>> {
        (**self).get_transitions(namespace, source)
    }

    fn get_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<Option<String>> {
        (**self).get_total(namespace, source)
    }
}

impl<T: ICounterWriter + ?Sized> ICounterWriter for std::sync::Arc<T> {
    fn increment_transition(
        &self,
        namespace: Namespace,
        source: &NodeId,
        field: &str,
    ) -> Anticip8Result<()> {
        (**self).increment_transition(namespace, source, field)
    }

    fn increment_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<()> {
        (**self).increment_total(namespace, source)
    }
}
