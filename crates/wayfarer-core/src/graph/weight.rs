//! Edge weight resolution.
//!
//! Weights are never stored. They are derived from an edge's property bag
//! every time an index is built, through [`edge_weight`], so that every
//! search agrees on the cost of the same edge.

use super::Edge;

/// Weight used when an edge carries no usable weight property.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Property keys recognised as a weight, matched case-sensitively.
pub const WEIGHT_KEYS: [&str; 2] = ["weight", "Weight"];

/// Returns the raw weight property of an edge, if any.
///
/// Scans properties in stored order and returns the value of the first
/// entry whose key is one of [`WEIGHT_KEYS`] and whose value is non-empty.
#[must_use]
pub fn weight_property(edge: &Edge) -> Option<&str> {
    edge.properties
        .iter()
        .find(|(key, value)| WEIGHT_KEYS.contains(key) && !value.is_empty())
        .map(|(_, value)| value)
}

/// Resolves the traversal cost of an edge.
///
/// Absent or unparseable weight properties resolve to [`DEFAULT_WEIGHT`].
/// This is a lenient default, not an error: edge properties are free-form
/// user data.
#[must_use]
pub fn edge_weight(edge: &Edge) -> i64 {
    weight_property(edge)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_common::types::{EdgeId, NodeId};

    fn edge() -> Edge {
        Edge::new(EdgeId::new(0), NodeId::new(1), NodeId::new(2))
    }

    #[test]
    fn test_weight_defaults_to_one() {
        assert_eq!(edge_weight(&edge()), 1);
        assert_eq!(edge_weight(&edge().with_property("cost", "9")), 1);
    }

    #[test]
    fn test_weight_parsed_from_either_key() {
        assert_eq!(edge_weight(&edge().with_property("weight", "7")), 7);
        assert_eq!(edge_weight(&edge().with_property("Weight", "0")), 0);
        assert_eq!(edge_weight(&edge().with_property("WEIGHT", "5")), 1);
    }

    #[test]
    fn test_weight_unparseable_falls_back() {
        assert_eq!(edge_weight(&edge().with_property("weight", "heavy")), 1);
        assert_eq!(edge_weight(&edge().with_property("weight", "2.5")), 1);
    }

    #[test]
    fn test_weight_first_non_empty_entry_wins() {
        let e = edge()
            .with_property("weight", "")
            .with_property("Weight", "4");
        assert_eq!(weight_property(&e), Some("4"));
        assert_eq!(edge_weight(&e), 4);

        let e = edge()
            .with_property("Weight", "8")
            .with_property("weight", "3");
        assert_eq!(edge_weight(&e), 8);
    }

    #[test]
    fn test_weight_surrounding_whitespace_is_ignored() {
        assert_eq!(edge_weight(&edge().with_property("weight", " 12 ")), 12);
        assert_eq!(edge_weight(&edge().with_property("weight", "-3")), -3);
    }
}
