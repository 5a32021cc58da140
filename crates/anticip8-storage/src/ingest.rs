//! Event ingestion: normalize, drop noise, increment counters.
//!
//! Each recorded event touches two counters per namespace: the destination
//! field of the source's transition hash, and the source's totals field.
//! The two increments are independent; a crash between them leaves the
//! totals one behind, which readers tolerate.

use serde::Serialize;

use anticip8_core::config::PolicyConfig;
use anticip8_core::errors::Anticip8Result;
use anticip8_core::models::{EdgeEvent, NavigationEvent, Namespace, NodeId};
use anticip8_core::traits::ICounterWriter;
use anticip8_observability::ingest_span;
use anticip8_paths::PathNormalizer;

/// What happened to an ingested event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestOutcome {
    Recorded,
    /// One of the paths was noise; nothing was counted.
    Skipped,
}

/// Records navigation events into a counter store.
pub struct Ingestor<W: ICounterWriter> {
    writer: W,
    normalizer: PathNormalizer,
}

impl<W: ICounterWriter> Ingestor<W> {
    pub fn new(writer: W, config: &PolicyConfig) -> Self {
        Self {
            writer,
            normalizer: PathNormalizer::new(config),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Record a same-service navigation.
    pub fn record_navigation(&self, event: &NavigationEvent) -> Anticip8Result<IngestOutcome> {
        let _span = ingest_span!(Namespace::SameService.name(), event.service).entered();
        let Some((from, to)) = self.normalize_pair(&event.from_path, &event.to_path) else {
            return Ok(IngestOutcome::Skipped);
        };
        let source = NodeId::new(event.service.as_str(), from);
        self.record(Namespace::SameService, &source, &to)
    }

    /// Record a cross-service navigation.
    pub fn record_edge(&self, event: &EdgeEvent) -> Anticip8Result<IngestOutcome> {
        self.record_packed(Namespace::CrossService, event)
    }

    /// Record a prefetch attempt issued by a client.
    pub fn record_prefetch_attempt(&self, event: &EdgeEvent) -> Anticip8Result<IngestOutcome> {
        self.record_packed(Namespace::PrefetchAttempt, event)
    }

    fn record_packed(
        &self,
        namespace: Namespace,
        event: &EdgeEvent,
    ) -> Anticip8Result<IngestOutcome> {
        let _span = ingest_span!(namespace.name(), event.src_service).entered();
        let Some((src, dst)) = self.normalize_pair(&event.src_path, &event.dst_path) else {
            return Ok(IngestOutcome::Skipped);
        };
        let source = NodeId::new(event.src_service.as_str(), src);
        let destination = NodeId::new(event.dst_service.as_str(), dst);
        self.record(namespace, &source, &destination.to_field())
    }

    fn normalize_pair(&self, from: &str, to: &str) -> Option<(String, String)> {
        let from = self.normalizer.normalize(from);
        let to = self.normalizer.normalize(to);
        if self.normalizer.is_noise(&from) || self.normalizer.is_noise(&to) {
            tracing::debug!(from = %from, to = %to, "noise path, event skipped");
            return None;
        }
        Some((from, to))
    }

    fn record(
        &self,
        namespace: Namespace,
        source: &NodeId,
        field: &str,
    ) -> Anticip8Result<IngestOutcome> {
        self.writer.increment_transition(namespace, source, field)?;
        self.writer.increment_total(namespace, source)?;
        tracing::debug!(
            namespace = namespace.name(),
            source = %source,
            field,
            "transition recorded"
        );
        Ok(IngestOutcome::Recorded)
    }
}
