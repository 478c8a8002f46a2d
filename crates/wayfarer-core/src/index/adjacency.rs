//! Undirected adjacency lists built from a flat edge list.
//!
//! This is the structure every search walks. It is optimized for:
//! - Single-pass construction from a caller-supplied edge slice
//! - Inline storage for the low degrees typical of road and knowledge graphs
//! - Weights resolved once at build time, so a search never re-parses
//!   properties in its inner loop
//!
//! An edge `a - b` is listed under both `a` and `b`. A self-loop is listed
//! once. Parallel edges are kept as separate entries.

use crate::graph::{Edge, GraphSnapshot, edge_weight};
use smallvec::SmallVec;
use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::hash::{FastHashMap, map_with_capacity};

/// Inline capacity of one incidence list.
const INLINE_DEGREE: usize = 4;

/// One edge seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    /// The edge.
    pub edge: EdgeId,
    /// The endpoint on the other side (the node itself for a self-loop).
    pub neighbor: NodeId,
    /// The resolved traversal cost of the edge.
    pub weight: i64,
}

type IncidenceList = SmallVec<[Incidence; INLINE_DEGREE]>;

/// Mapping from node id to the edges incident to it.
///
/// Built fresh per call and never shared between calls. Incidence lists
/// keep the order of the source edge list.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    /// Incidence lists indexed by node.
    lists: FastHashMap<NodeId, IncidenceList>,
    /// Number of distinct edges indexed.
    edge_count: usize,
}

impl AdjacencyIndex {
    /// Builds an index over every edge in `edges`.
    ///
    /// Every endpoint referenced by an edge gets an entry.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut index = Self {
            lists: FastHashMap::default(),
            edge_count: 0,
        };
        for edge in edges {
            index.add_edge(edge);
        }
        index
    }

    /// Builds an index over the traversable edges of a snapshot.
    ///
    /// Every node of the snapshot gets an entry, empty if it has no
    /// incident edges. Edges with an endpoint outside the node domain are
    /// left out.
    #[must_use]
    pub fn for_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut lists = map_with_capacity(snapshot.node_count());
        for node in snapshot.nodes() {
            lists.insert(node.id, IncidenceList::new());
        }

        let mut index = Self {
            lists,
            edge_count: 0,
        };
        for edge in snapshot.traversable_edges() {
            index.add_edge(edge);
        }
        index
    }

    fn add_edge(&mut self, edge: &Edge) {
        let weight = edge_weight(edge);
        self.lists
            .entry(edge.source)
            .or_default()
            .push(Incidence {
                edge: edge.id,
                neighbor: edge.target,
                weight,
            });
        if !edge.is_self_loop() {
            self.lists
                .entry(edge.target)
                .or_default()
                .push(Incidence {
                    edge: edge.id,
                    neighbor: edge.source,
                    weight,
                });
        }
        self.edge_count += 1;
    }

    /// Returns the edges incident to `node`, empty if the node is unknown.
    #[must_use]
    pub fn incident(&self, node: NodeId) -> &[Incidence] {
        self.lists
            .get(&node)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if `node` has an entry in the index.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.lists.contains_key(&node)
    }

    /// Returns the number of incidence entries for `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident(node).len()
    }

    /// Returns the number of nodes with an entry.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of distinct edges indexed.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn e(id: u64) -> EdgeId {
        EdgeId::new(id)
    }

    #[test]
    fn test_basic_adjacency() {
        let edges = vec![
            Edge::new(e(0), n(0), n(1)),
            Edge::new(e(1), n(0), n(2)),
            Edge::new(e(2), n(0), n(3)),
        ];
        let index = AdjacencyIndex::from_edges(&edges);

        let neighbors: Vec<_> = index.incident(n(0)).iter().map(|i| i.neighbor).collect();
        assert_eq!(neighbors, vec![n(1), n(2), n(3)]);
        assert_eq!(index.degree(n(1)), 1);
        assert_eq!(index.incident(n(1))[0].neighbor, n(0));
        assert_eq!(index.edge_count(), 3);
        assert_eq!(index.node_count(), 4);
    }

    #[test]
    fn test_self_loop_listed_once() {
        let edges = vec![Edge::new(e(0), n(5), n(5))];
        let index = AdjacencyIndex::from_edges(&edges);

        assert_eq!(index.degree(n(5)), 1);
        assert_eq!(index.incident(n(5))[0].neighbor, n(5));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let edges = vec![
            Edge::weighted(e(0), n(1), n(2), 4),
            Edge::weighted(e(1), n(2), n(1), 2),
        ];
        let index = AdjacencyIndex::from_edges(&edges);

        assert_eq!(index.degree(n(1)), 2);
        assert_eq!(index.degree(n(2)), 2);

        let from_one: Vec<_> = index.incident(n(1)).iter().map(|i| (i.edge, i.weight)).collect();
        assert_eq!(from_one, vec![(e(0), 4), (e(1), 2)]);
    }

    #[test]
    fn test_weights_resolved_at_build() {
        let edges = vec![
            Edge::new(e(0), n(1), n(2)).with_property("Weight", "6"),
            Edge::new(e(1), n(2), n(3)).with_property("weight", "x"),
        ];
        let index = AdjacencyIndex::from_edges(&edges);

        assert_eq!(index.incident(n(1))[0].weight, 6);
        assert_eq!(index.incident(n(3))[0].weight, 1);
    }

    #[test]
    fn test_snapshot_index_includes_isolated_nodes() {
        let snapshot = GraphSnapshot::new(
            [Node::new(n(1)), Node::new(n(2)), Node::new(n(3))],
            [Edge::new(e(0), n(1), n(2)), Edge::new(e(1), n(2), n(9))],
        )
        .unwrap();
        let index = AdjacencyIndex::for_snapshot(&snapshot);

        assert!(index.contains(n(3)));
        assert_eq!(index.degree(n(3)), 0);
        assert!(!index.contains(n(9)));
        assert_eq!(index.degree(n(2)), 1);
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn test_unknown_node_has_no_incidences() {
        let index = AdjacencyIndex::from_edges(std::iter::empty());
        assert!(index.incident(n(42)).is_empty());
        assert!(!index.contains(n(42)));
    }
}
