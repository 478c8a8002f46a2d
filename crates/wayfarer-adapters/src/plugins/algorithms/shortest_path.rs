//! Dijkstra's algorithm for weighted shortest paths.
//!
//! Edges are undirected and weights come from
//! [`edge_weight`](wayfarer_core::edge_weight), so `dijkstra(a, b)` and
//! `dijkstra(b, a)` cost the same.
//!
//! # Negative Weights
//!
//! Weights must be non-negative. [`GraphSnapshot`] construction rejects
//! negative weights, so any index built with
//! [`AdjacencyIndex::for_snapshot`] is safe. An index built by hand from
//! arbitrary edges carries no such guarantee.
//!
//! # Large Weights
//!
//! Snapshot construction also rejects graphs whose traversable weights sum
//! to `i64::MAX` or more. Every path cost therefore stays below the
//! internal "unreached" distance, and `saturating_add` never clamps.

use std::collections::BinaryHeap;

use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::hash::{FastHashMap, FastHashSet, map_with_capacity};
use wayfarer_core::{AdjacencyIndex, GraphSnapshot};

use super::path::{PathResult, reconstruct_path};
use super::traits::MinScored;

/// Distance of a node that has not been reached.
const UNREACHED: i64 = i64::MAX;

/// Nodes and edges hidden from a search.
///
/// Lets a caller search a reduced graph without copying or mutating the
/// snapshot or its index.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    nodes: FastHashSet<NodeId>,
    edges: FastHashSet<EdgeId>,
}

impl Exclusions {
    /// Creates an empty exclusion set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides a node. Returns false if it was already hidden.
    pub fn exclude_node(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Hides an edge. Returns false if it was already hidden.
    pub fn exclude_edge(&mut self, edge: EdgeId) -> bool {
        self.edges.insert(edge)
    }

    /// Returns true if `node` is hidden.
    #[must_use]
    pub fn excludes_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns true if `edge` is hidden.
    #[must_use]
    pub fn excludes_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Returns true if nothing is hidden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Finds the cheapest path from `source` to `target`.
///
/// Returns [`PathResult::not_found`] if either endpoint is not in the
/// snapshot or the target is unreachable.
#[must_use]
pub fn dijkstra(snapshot: &GraphSnapshot, source: NodeId, target: NodeId) -> PathResult {
    let index = AdjacencyIndex::for_snapshot(snapshot);
    dijkstra_indexed(&index, source, target, &Exclusions::new())
}

/// Dijkstra over a prebuilt index, skipping excluded nodes and edges.
///
/// The node domain is the set of nodes with an entry in `index`. Queue
/// ties are broken by the lower node id; among equally cheap predecessors
/// the first one relaxed wins, so results follow the edge order of the
/// index.
#[must_use]
pub fn dijkstra_indexed(
    index: &AdjacencyIndex,
    source: NodeId,
    target: NodeId,
    exclusions: &Exclusions,
) -> PathResult {
    let in_domain = |node: NodeId| index.contains(node) && !exclusions.excludes_node(node);

    if !in_domain(source) {
        tracing::debug!("Shortest path source {} is not in the graph", source);
        return PathResult::not_found();
    }
    if !in_domain(target) {
        tracing::debug!("Shortest path target {} is not in the graph", target);
        return PathResult::not_found();
    }
    if source == target {
        return PathResult::single_node(source);
    }

    let mut distances: FastHashMap<NodeId, i64> = map_with_capacity(index.node_count());
    let mut predecessors: FastHashMap<NodeId, (NodeId, EdgeId)> =
        map_with_capacity(index.node_count());
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0);
    heap.push(MinScored(0i64, source));

    while let Some(MinScored(distance, current)) = heap.pop() {
        // Stale entry: a shorter route was found after this one was queued
        if distance > distances.get(&current).copied().unwrap_or(UNREACHED) {
            continue;
        }

        if current == target {
            return reconstruct_path(&predecessors, source, target, distance);
        }

        for incidence in index.incident(current) {
            if exclusions.excludes_edge(incidence.edge)
                || exclusions.excludes_node(incidence.neighbor)
            {
                continue;
            }

            let candidate = distance.saturating_add(incidence.weight);
            let known = distances
                .get(&incidence.neighbor)
                .copied()
                .unwrap_or(UNREACHED);
            if candidate < known {
                distances.insert(incidence.neighbor, candidate);
                predecessors.insert(incidence.neighbor, (current, incidence.edge));
                heap.push(MinScored(candidate, incidence.neighbor));
            }
        }
    }

    PathResult::not_found()
}
