//! Property tests: idempotence, placeholder positions, noise pass-through.

use anticip8_paths::{PathNormalizer, SourceTokens};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[0-9]{1,6}",
        "[a-z0-9_-]{0,6}",
        Just("{id}".to_string()),
        Just(uuid::Uuid::new_v4().to_string()),
    ]
}

fn raw_path() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment(), 0..6),
        any::<bool>(),
        0usize..3,
    )
        .prop_map(|(segments, leading, trailing)| {
            let mut path = if leading { "/".to_string() } else { String::new() };
            path.push_str(&segments.join("/"));
            path.push_str(&"/".repeat(trailing));
            path
        })
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(raw in raw_path()) {
        let n = PathNormalizer::default();
        let once = n.normalize(&raw);
        prop_assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn prop_integer_segment_maps_to_id(
        prefix in prop::collection::vec("[a-z]{1,6}", 1..4),
        id in 0u64..1_000_000_000,
        suffix in prop::collection::vec("[a-z]{1,6}", 0..3),
    ) {
        let n = PathNormalizer::default();
        let raw = format!("/api/{}/{id}/{}", prefix.join("/"), suffix.join("/"));
        let normalized = n.normalize(&raw);
        let mut expected = format!("/api/{}/{{id}}", prefix.join("/"));
        if !suffix.is_empty() {
            expected.push('/');
            expected.push_str(&suffix.join("/"));
        }
        prop_assert_eq!(normalized, expected);
    }

    #[test]
    fn prop_uuid_segment_maps_to_uuid(prefix in "[a-z]{1,6}") {
        let n = PathNormalizer::default();
        let raw = format!("/api/{prefix}/{}", uuid::Uuid::new_v4());
        prop_assert_eq!(n.normalize(&raw), format!("/api/{prefix}/{{uuid}}"));
        prop_assert!(SourceTokens::detect(&raw, &n.normalize(&raw)).has_uuid);
    }

    #[test]
    fn prop_noise_paths_are_untouched(suffix in "(/[0-9a-z]{0,5}){0,4}/?") {
        let n = PathNormalizer::default();
        for prefix in ["/docs", "/health", "/metrics", "/openapi.json", "/redoc", "/_whoami"] {
            let raw = format!("{prefix}{suffix}");
            prop_assert!(n.is_noise(&raw));
            prop_assert_eq!(n.normalize(&raw), raw);
        }
    }
}
