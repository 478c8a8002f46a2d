//! A* search guided by planar node coordinates.
//!
//! The heuristic is only admissible when every edge weight is at least the
//! geometric distance between its endpoints. With weights unrelated to
//! geometry the search still terminates, but the path it returns may not
//! be the cheapest one.
//!
//! When the coordinates or weights needed for guidance are missing, the
//! whole query is handed to [`dijkstra`] and reported with zero visited
//! nodes.

use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::hash::{FastHashMap, map_with_capacity};
use wayfarer_core::{AdjacencyIndex, GraphSnapshot, Node};

use super::path::{PathResult, reconstruct_path};
use super::shortest_path::dijkstra;
use super::traits::MinScored;

/// Distance estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// `|dx| + |dy|`.
    Manhattan,
    /// Straight-line distance.
    #[default]
    Euclidean,
}

impl Heuristic {
    /// Resolves a heuristic by name.
    ///
    /// `"manhattan"` (ASCII case-insensitive) selects [`Heuristic::Manhattan`];
    /// every other name selects [`Heuristic::Euclidean`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("manhattan") {
            Self::Manhattan
        } else {
            if !name.eq_ignore_ascii_case("euclidean") {
                tracing::debug!("Unknown heuristic '{}', using euclidean", name);
            }
            Self::Euclidean
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    /// Estimates the remaining cost between two points.
    #[must_use]
    pub fn estimate(self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let dx = from.0 - to.0;
        let dy = from.1 - to.1;
        match self {
            Self::Manhattan => dx.abs() + dy.abs(),
            Self::Euclidean => dx.hypot(dy),
        }
    }
}

/// Result of an A* query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AStarResult {
    /// The path found, or the sentinel.
    pub path: PathResult,
    /// Frontier nodes expanded. Zero when the query fell back to Dijkstra.
    pub nodes_visited: usize,
}

impl AStarResult {
    /// Returns true if the informed search actually ran.
    #[must_use]
    pub fn was_informed(&self) -> bool {
        self.nodes_visited > 0
    }
}

/// Finds a path from `source` to `target` with A*.
///
/// Falls back to [`dijkstra`] when either endpoint has no coordinates (or
/// is unknown), or when no traversable edge carries a weight property.
/// Intermediate nodes without coordinates get a zero estimate.
///
/// Among frontier nodes with equal `f`, the lower node id is expanded
/// first.
#[must_use]
pub fn astar(
    snapshot: &GraphSnapshot,
    source: NodeId,
    target: NodeId,
    heuristic: Heuristic,
) -> AStarResult {
    let endpoints = snapshot
        .node(source)
        .and_then(Node::coordinates)
        .zip(snapshot.node(target).and_then(Node::coordinates));

    let Some((_, goal)) = endpoints else {
        tracing::debug!(
            "A* from {} to {} lacks endpoint coordinates, delegating to Dijkstra",
            source,
            target
        );
        return fallback(snapshot, source, target);
    };
    if !snapshot.has_weight_properties() {
        tracing::debug!("A* graph has no weight properties, delegating to Dijkstra");
        return fallback(snapshot, source, target);
    }

    if source == target {
        return AStarResult {
            path: PathResult::single_node(source),
            nodes_visited: 1,
        };
    }

    let estimate = |node: NodeId| {
        snapshot
            .node(node)
            .and_then(Node::coordinates)
            .map_or(0.0, |position| heuristic.estimate(position, goal))
    };

    let index = AdjacencyIndex::for_snapshot(snapshot);
    let mut g_score: FastHashMap<NodeId, i64> = map_with_capacity(index.node_count());
    let mut f_score: FastHashMap<NodeId, f64> = map_with_capacity(index.node_count());
    let mut predecessors: FastHashMap<NodeId, (NodeId, EdgeId)> =
        map_with_capacity(index.node_count());
    let mut open = BinaryHeap::new();
    let mut visited = 0usize;

    let start_f = estimate(source);
    g_score.insert(source, 0);
    f_score.insert(source, start_f);
    open.push(MinScored(start_f, source));

    while let Some(MinScored(f, current)) = open.pop() {
        if f_score.get(&current).is_some_and(|&best| f > best) {
            continue;
        }
        visited += 1;

        let g = g_score.get(&current).copied().unwrap_or(i64::MAX);
        if current == target {
            tracing::debug!("A* reached {} after visiting {} nodes", target, visited);
            return AStarResult {
                path: reconstruct_path(&predecessors, source, target, g),
                nodes_visited: visited,
            };
        }

        for incidence in index.incident(current) {
            let tentative = g.saturating_add(incidence.weight);
            let known = g_score.get(&incidence.neighbor).copied().unwrap_or(i64::MAX);
            if tentative < known {
                let f = tentative as f64 + estimate(incidence.neighbor);
                g_score.insert(incidence.neighbor, tentative);
                f_score.insert(incidence.neighbor, f);
                predecessors.insert(incidence.neighbor, (current, incidence.edge));
                open.push(MinScored(f, incidence.neighbor));
            }
        }
    }

    tracing::debug!("A* exhausted the frontier after {} nodes", visited);
    AStarResult {
        path: PathResult::not_found(),
        nodes_visited: visited,
    }
}

fn fallback(snapshot: &GraphSnapshot, source: NodeId, target: NodeId) -> AStarResult {
    AStarResult {
        path: dijkstra(snapshot, source, target),
        nodes_visited: 0,
    }
}
