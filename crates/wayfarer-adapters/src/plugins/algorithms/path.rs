//! Path results shared by every search.

use serde::{Deserialize, Serialize};
use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::hash::FastHashMap;

/// Total weight reported when no path exists or the query is invalid.
pub const NO_PATH_WEIGHT: i64 = -1;

/// A route through the graph.
///
/// `edges[i]` connects `nodes[i]` and `nodes[i + 1]`. The sentinel
/// [`PathResult::not_found`] has empty sequences and a total weight of
/// [`NO_PATH_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Nodes from source to target, inclusive.
    pub nodes: Vec<NodeId>,
    /// Edges traversed, one fewer than `nodes`.
    pub edges: Vec<EdgeId>,
    /// Sum of the traversed edge weights.
    pub total_weight: i64,
}

impl PathResult {
    /// The "no path / invalid query" sentinel.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            total_weight: NO_PATH_WEIGHT,
        }
    }

    /// A zero-length path that starts and ends at `node`.
    #[must_use]
    pub fn single_node(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    /// Returns true unless this is the sentinel.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.total_weight != NO_PATH_WEIGHT
    }

    /// First node of the path.
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }
}

/// Up to `requested` loopless paths in non-decreasing weight order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KShortestPaths {
    /// Number of paths asked for.
    pub requested: usize,
    /// Paths found, cheapest first.
    pub paths: Vec<PathResult>,
}

impl KShortestPaths {
    /// Number of paths actually found.
    #[must_use]
    pub fn found(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if fewer paths exist than were requested.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.paths.len() < self.requested
    }
}

/// Walks predecessor links back from `target` to `source`.
pub(crate) fn reconstruct_path(
    predecessors: &FastHashMap<NodeId, (NodeId, EdgeId)>,
    source: NodeId,
    target: NodeId,
    total_weight: i64,
) -> PathResult {
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut current = target;

    while current != source {
        let Some(&(parent, edge)) = predecessors.get(&current) else {
            return PathResult::not_found();
        };
        edges.push(edge);
        nodes.push(parent);
        current = parent;
    }

    nodes.reverse();
    edges.reverse();
    PathResult {
        nodes,
        edges,
        total_weight,
    }
}
