//! Reads the counter tables of one source node and folds them into a single
//! [`TransitionMap`]. Unreadable tables are skipped and reported.

use anticip8_core::config::PolicyConfig;
use anticip8_core::models::{DegradationEvent, Namespace, NodeId};
use anticip8_core::traits::ICounterStore;
use anticip8_observability::tracing_setup::events;

use crate::count_table::{parse_count, CountTable};
use crate::estimator;
use crate::transition_map::TransitionMap;

const COMPONENT: &str = "markov";

/// Combined transition probabilities for one source.
#[derive(Debug, Clone, Default)]
pub struct TransitionSignals {
    pub map: TransitionMap,
    /// Tables that failed to read and were treated as empty.
    pub degraded: Vec<DegradationEvent>,
}

/// Gather every enabled transition signal for `source`.
pub fn gather(
    store: &impl ICounterStore,
    config: &PolicyConfig,
    source: &NodeId,
) -> TransitionSignals {
    let mut signals = TransitionSignals::default();

    for namespace in [Namespace::SameService, Namespace::CrossService] {
        if let Some(table) = read_table(store, config, namespace, source, &mut signals.degraded) {
            signals.map.extend_max(estimator::smoothed(
                &table,
                config.markov_smooth,
                config.min_prob,
            ));
        }
    }

    if config.allow_prefetch_attempts {
        let namespace = Namespace::PrefetchAttempt;
        let total = match store.get_total(namespace, source) {
            Ok(raw) => raw.as_deref().and_then(parse_count).unwrap_or(0),
            Err(e) => {
                signals.degraded.push(degrade(namespace, source, &e.to_string()));
                0
            }
        };
        if total > 0 {
            if let Some(table) =
                read_table(store, config, namespace, source, &mut signals.degraded)
            {
                signals.map.extend_max(estimator::discounted(
                    &table,
                    total,
                    config.prefetch_attempt_weight,
                    config.min_prob,
                ));
            }
        }
    }

    signals
}

fn read_table(
    store: &impl ICounterStore,
    config: &PolicyConfig,
    namespace: Namespace,
    source: &NodeId,
    degraded: &mut Vec<DegradationEvent>,
) -> Option<CountTable> {
    match store.get_transitions(namespace, source) {
        Ok(raw) => Some(CountTable::parse(
            namespace,
            source,
            &raw,
            config.drop_self_loops,
        )),
        Err(e) => {
            degraded.push(degrade(namespace, source, &e.to_string()));
            None
        }
    }
}

fn degrade(namespace: Namespace, source: &NodeId, failure: &str) -> DegradationEvent {
    let event = DegradationEvent::now(
        format!("{COMPONENT}.{}", namespace.name()),
        format!("{source}: {failure}"),
        "empty table",
    );
    events::degradation_triggered(&event);
    event
}
