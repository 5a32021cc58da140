use std::cmp::Ordering;

use anticip8_core::models::{score_order, NodeId};
use proptest::prelude::*;

fn service() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}"
}

fn path() -> impl Strategy<Value = String> {
    "(/[a-z0-9{}._-]{0,8}){0,5}"
}

proptest! {
    #[test]
    fn field_form_round_trips(service in service(), path in path()) {
        let node = NodeId::new(service, path);
        prop_assert_eq!(NodeId::from_field(&node.to_field()), Some(node));
    }

    #[test]
    fn node_key_form_round_trips(service in service(), path in path()) {
        let node = NodeId::new(service, path);
        prop_assert_eq!(NodeId::from_node_key(&node.to_node_key()), Some(node));
    }

    #[test]
    fn field_form_keeps_separators_inside_path(service in service(), path in "/[a-z|]{0,8}") {
        let node = NodeId::new(service, path);
        prop_assert_eq!(NodeId::from_field(&node.to_field()), Some(node));
    }

    #[test]
    fn score_order_is_total_and_descending(
        a in (service(), path(), -1.0f64..1.0),
        b in (service(), path(), -1.0f64..1.0),
    ) {
        let na = NodeId::new(a.0, a.1);
        let nb = NodeId::new(b.0, b.1);
        let ab = score_order((&na, a.2), (&nb, b.2));
        let ba = score_order((&nb, b.2), (&na, a.2));
        prop_assert_eq!(ab, ba.reverse());
        if a.2 > b.2 {
            prop_assert_eq!(ab, Ordering::Less);
        }
        if ab == Ordering::Equal {
            prop_assert_eq!(&na, &nb);
        }
    }
}
