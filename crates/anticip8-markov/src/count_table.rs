use std::collections::HashMap;

use anticip8_core::models::{Namespace, NodeId};

/// Parsed destination counts observed from one source node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountTable {
    /// Positive counts per destination, self-loops excluded when suppressed.
    pub counts: HashMap<NodeId, u64>,
    /// Sum of every valid count, suppressed self-loops included.
    pub total: u64,
}

impl CountTable {
    /// Parse a raw hash read from the counter store.
    ///
    /// Non-numeric, zero and negative values are ignored. Packed fields that
    /// do not split into `service|path` are ignored. With `drop_self_loops`,
    /// observations of `source` itself stay in `total` but never become a
    /// destination.
    pub fn parse(
        namespace: Namespace,
        source: &NodeId,
        raw: &HashMap<String, String>,
        drop_self_loops: bool,
    ) -> Self {
        let mut table = Self::default();
        for (field, value) in raw {
            let Some(count) = parse_count(value) else {
                continue;
            };
            let destination = if namespace.packs_service() {
                match NodeId::from_field(field) {
                    Some(node) => node,
                    None => continue,
                }
            } else {
                NodeId::new(source.service.as_str(), field.as_str())
            };

            table.total = table.total.saturating_add(count);
            if drop_self_loops && &destination == source {
                continue;
            }
            let slot = table.counts.entry(destination).or_default();
            *slot = slot.saturating_add(count);
        }
        table
    }

    pub fn from_counts(counts: HashMap<NodeId, u64>) -> Self {
        let total = counts.values().fold(0u64, |acc, c| acc.saturating_add(*c));
        Self { counts, total }
    }

    /// Number of distinct destinations.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A stored counter value, if it is a positive integer.
pub fn parse_count(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|c| *c > 0)
        .map(|c| c as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn same_service_fields_inherit_source_service() {
        let src = NodeId::new("users", "/users");
        let t = CountTable::parse(
            Namespace::SameService,
            &src,
            &raw(&[("/users/{id}", "3")]),
            true,
        );
        assert_eq!(t.counts[&NodeId::new("users", "/users/{id}")], 3);
        assert_eq!(t.total, 3);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let src = NodeId::new("users", "/users");
        let t = CountTable::parse(
            Namespace::SameService,
            &src,
            &raw(&[("/a", "x"), ("/b", "0"), ("/c", "-2"), ("/d", "5")]),
            true,
        );
        assert_eq!(t.distinct(), 1);
        assert_eq!(t.total, 5);
    }

    #[test]
    fn unpackable_fields_are_ignored() {
        let src = NodeId::new("users", "/users");
        let t = CountTable::parse(
            Namespace::CrossService,
            &src,
            &raw(&[("orders/orders", "4"), ("orders|/orders", "2")]),
            true,
        );
        assert_eq!(t.distinct(), 1);
        assert_eq!(t.counts[&NodeId::new("orders", "/orders")], 2);
    }

    #[test]
    fn suppressed_self_loops_stay_in_total() {
        let src = NodeId::new("users", "/users/{id}");
        let t = CountTable::parse(
            Namespace::SameService,
            &src,
            &raw(&[("/users/{id}", "1"), ("/users/{id}/orders", "9")]),
            true,
        );
        assert_eq!(t.distinct(), 1);
        assert_eq!(t.total, 10);

        let kept = CountTable::parse(
            Namespace::SameService,
            &src,
            &raw(&[("/users/{id}", "1"), ("/users/{id}/orders", "9")]),
            false,
        );
        assert_eq!(kept.distinct(), 2);
    }

    #[test]
    fn cross_service_self_loop_needs_matching_service() {
        let src = NodeId::new("users", "/users");
        let t = CountTable::parse(
            Namespace::CrossService,
            &src,
            &raw(&[("users|/users", "2"), ("orders|/users", "2")]),
            true,
        );
        assert_eq!(t.distinct(), 1);
        assert!(t.counts.contains_key(&NodeId::new("orders", "/users")));
    }
}
