use std::collections::{HashMap, HashSet};

use anticip8_core::config::PolicyConfig;
use anticip8_core::models::{Namespace, NodeId};
use anticip8_markov::estimator::smoothed;
use anticip8_markov::{gather, CountTable, TransitionMap};
use anticip8_storage::MemoryCounterStore;
use proptest::prelude::*;

fn arb_table() -> impl Strategy<Value = CountTable> {
    prop::collection::hash_map("/[a-z]{1,5}", 1u64..1000, 1..12).prop_map(|counts| {
        CountTable::from_counts(
            counts
                .into_iter()
                .map(|(p, c)| (NodeId::new("svc", p), c))
                .collect::<HashMap<_, _>>(),
        )
    })
}

proptest! {
    #[test]
    fn probabilities_lie_in_unit_interval(table in arb_table(), alpha in 0.0f64..5.0) {
        for (_, p) in smoothed(&table, alpha, 0.0) {
            prop_assert!(p > 0.0 && p <= 1.0);
        }
    }

    #[test]
    fn probabilities_sum_to_at_most_one(table in arb_table(), alpha in 0.0f64..5.0) {
        let sum: f64 = smoothed(&table, alpha, 0.0).iter().map(|(_, p)| p).sum();
        prop_assert!(sum <= 1.0 + 1e-9);
    }

    #[test]
    fn floor_is_respected(table in arb_table(), alpha in 0.0f64..5.0, floor in 0.0f64..0.5) {
        for (_, p) in smoothed(&table, alpha, floor) {
            prop_assert!(p >= floor);
        }
    }

    #[test]
    fn higher_counts_never_rank_lower(table in arb_table(), alpha in 0.0f64..5.0) {
        let probs: HashMap<NodeId, f64> = smoothed(&table, alpha, 0.0).into_iter().collect();
        for (a, ca) in &table.counts {
            for (b, cb) in &table.counts {
                if ca > cb {
                    prop_assert!(probs[a] >= probs[b]);
                }
            }
        }
    }

    #[test]
    fn merge_keeps_per_destination_maximum(
        first in prop::collection::vec((0usize..6, 0.0f64..1.0), 0..12),
        second in prop::collection::vec((0usize..6, 0.0f64..1.0), 0..12),
    ) {
        let node = |i: usize| NodeId::new("svc", format!("/p{i}"));
        let mut forward = TransitionMap::new();
        forward.extend_max(first.iter().chain(&second).map(|(i, p)| (node(*i), *p)));
        let mut backward = TransitionMap::new();
        backward.extend_max(second.iter().chain(&first).map(|(i, p)| (node(*i), *p)));
        prop_assert_eq!(&forward, &backward);

        for i in 0..6 {
            let expected = first
                .iter()
                .chain(&second)
                .filter(|(j, _)| *j == i)
                .map(|(_, p)| *p)
                .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))));
            prop_assert_eq!(forward.get(&node(i)), expected);
        }
    }

    #[test]
    fn gathered_probability_is_max_of_tables(
        same in prop::collection::hash_map(0usize..5, 1u32..40, 1..5),
        cross in prop::collection::hash_map(0usize..5, 1u32..40, 1..5),
    ) {
        let store = MemoryCounterStore::new();
        let source = NodeId::new("svc", "/src");
        let same_key = Namespace::SameService.transitions_key("svc", "/src");
        let cross_key = Namespace::CrossService.transitions_key("svc", "/src");
        for (i, c) in &same {
            store.set_field(&same_key, &format!("/p{i}"), &c.to_string());
        }
        for (i, c) in &cross {
            store.set_field(&cross_key, &format!("svc|/p{i}"), &c.to_string());
        }

        let config = PolicyConfig { min_prob: 0.0, ..PolicyConfig::default() };
        let signals = gather(&store, &config, &source);

        let table = |counts: &HashMap<usize, u32>| {
            CountTable::from_counts(
                counts
                    .iter()
                    .map(|(i, c)| (NodeId::new("svc", format!("/p{i}")), u64::from(*c)))
                    .collect(),
            )
        };
        let a: HashMap<NodeId, f64> =
            smoothed(&table(&same), config.markov_smooth, 0.0).into_iter().collect();
        let b: HashMap<NodeId, f64> =
            smoothed(&table(&cross), config.markov_smooth, 0.0).into_iter().collect();
        for (node, p) in signals.map.iter() {
            let expected = a
                .get(node)
                .copied()
                .unwrap_or(0.0)
                .max(b.get(node).copied().unwrap_or(0.0));
            prop_assert!((p - expected).abs() < 1e-12, "{} scored {} want {}", node, p, expected);
        }
        let distinct: HashSet<&usize> = same.keys().chain(cross.keys()).collect();
        prop_assert_eq!(signals.map.len(), distinct.len());
    }
}
