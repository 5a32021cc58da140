//! Process-local counter store.
//!
//! Each key maps to a field table guarded by its `DashMap` shard lock, so an
//! increment is atomic with respect to concurrent writers.

use std::collections::HashMap;

use dashmap::DashMap;

use anticip8_core::errors::Anticip8Result;
use anticip8_core::models::{Namespace, NodeId};
use anticip8_core::traits::{IArtifactStore, IArtifactWriter, ICounterStore, ICounterWriter};

use crate::incremented;

/// In-memory counter and artifact store.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    hashes: DashMap<String, HashMap<String, String>>,
    artifacts: DashMap<String, String>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a raw hash field.
    pub fn set_field(&self, key: &str, field: &str, value: &str) {
        self.hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    /// Raw field table of `key`.
    pub fn get_hash(&self, key: &str) -> HashMap<String, String> {
        self.hashes
            .get(key)
            .map(|fields| fields.clone())
            .unwrap_or_default()
    }

    fn increment(&self, key: String, field: &str) {
        let mut fields = self.hashes.entry(key).or_default();
        let next = incremented(fields.get(field).map(String::as_str));
        fields.insert(field.to_string(), next);
    }
}

impl ICounterStore for MemoryCounterStore {
    fn get_transitions(
        &self,
        namespace: Namespace,
        source: &NodeId,
    ) -> Anticip8Result<HashMap<String, String>> {
        Ok(self.get_hash(&namespace.transitions_key(&source.service, &source.path)))
    }

    fn get_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<Option<String>> {
        Ok(self
            .hashes
            .get(&namespace.totals_key(&source.service))
            .and_then(|fields| fields.get(&source.path).cloned()))
    }
}

impl ICounterWriter for MemoryCounterStore {
    fn increment_transition(
        &self,
        namespace: Namespace,
        source: &NodeId,
        field: &str,
    ) -> Anticip8Result<()> {
        self.increment(
            namespace.transitions_key(&source.service, &source.path),
            field,
        );
        Ok(())
    }

    fn increment_total(&self, namespace: Namespace, source: &NodeId) -> Anticip8Result<()> {
        self.increment(namespace.totals_key(&source.service), &source.path);
        Ok(())
    }
}

impl IArtifactStore for MemoryCounterStore {
    fn get_artifact(&self, key: &str) -> Anticip8Result<Option<String>> {
        Ok(self.artifacts.get(key).map(|v| v.value().clone()))
    }
}

impl IArtifactWriter for MemoryCounterStore {
    fn put_artifact(&self, key: &str, payload: &str) -> Anticip8Result<()> {
        self.artifacts.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
