use std::sync::Arc;

use anticip8_core::config::Anticip8Config;
use anticip8_core::models::{EmbeddingCandidate, Namespace, NodeId, PolicyQuery};
use anticip8_embeddings::I2vCandidateSource;
use anticip8_markov::TransitionMap;
use anticip8_policy::fusion::hybrid;
use anticip8_policy::PolicyEngine;
use anticip8_storage::MemoryCounterStore;
use proptest::prelude::*;

fn arb_fields() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::vec(
        (
            prop_oneof!["/[a-z]{1,4}", "/[a-z]{1,4}/\\{id\\}", "/[a-z]{1,4}/\\{uuid\\}"],
            1u32..50,
        ),
        0..15,
    )
}

fn engine_over(
    source: &str,
    fields: &[(String, u32)],
) -> PolicyEngine<Arc<MemoryCounterStore>, I2vCandidateSource<Arc<MemoryCounterStore>>> {
    let store = Arc::new(MemoryCounterStore::new());
    let key = Namespace::SameService.transitions_key("svc", source);
    for (field, count) in fields {
        store.set_field(&key, field, &count.to_string());
    }
    store.set_field(&key, source, "7");
    let config = Anticip8Config::default();
    let embeddings = I2vCandidateSource::new(Arc::clone(&store), &config.embeddings);
    PolicyEngine::new(store, embeddings, config)
}

proptest! {
    #[test]
    fn results_are_sorted_bounded_and_finite(fields in arb_fields(), limit in 0usize..8) {
        let engine = engine_over("/home", &fields);
        let response = engine.compute(&PolicyQuery::new("svc", "/home", Some(limit))).unwrap();
        prop_assert!(response.next_paths.len() <= limit);
        for pair in response.next_paths.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for p in &response.next_paths {
            prop_assert!(p.score.is_finite());
        }
    }

    #[test]
    fn source_never_recommended(fields in arb_fields()) {
        let engine = engine_over("/home", &fields);
        let response = engine.compute(&PolicyQuery::new("svc", "/home", Some(20))).unwrap();
        prop_assert!(response.next_paths.iter().all(|p| p.path != "/home"));
    }

    #[test]
    fn placeholders_need_matching_source_tokens(fields in arb_fields()) {
        let engine = engine_over("/home", &fields);
        let response = engine.compute(&PolicyQuery::new("svc", "/home", Some(20))).unwrap();
        for p in &response.next_paths {
            let fillable = !p.path.contains("{id}") && !p.path.contains("{uuid}");
            prop_assert!(fillable, "unfillable template returned: {}", p.path);
        }
    }

    #[test]
    fn hybrid_never_scores_below_weighted_markov(
        probs in prop::collection::vec(0.01f64..1.0, 1..10),
        cos in -1.0f64..1.0,
        alpha in 0.0f64..1.0,
    ) {
        let transitions: TransitionMap = probs
            .iter()
            .enumerate()
            .map(|(i, p)| (NodeId::new("svc", format!("/p{i}")), *p))
            .collect();
        let candidates = vec![EmbeddingCandidate { node: NodeId::new("svc", "/p0"), score: cos }];
        let fused = hybrid(&transitions, &candidates, &NodeId::new("svc", "/src"), alpha, 4, true);
        let p0 = fused.iter().find(|(n, _)| n.path == "/p0").map(|(_, s)| *s).unwrap();
        prop_assert!(p0 >= (1.0 - alpha) * probs[0] - 1e-12);
    }
}
