//! Nodes, edges, and the immutable snapshot searches run over.

use super::PropertyBag;
use super::weight::{edge_weight, weight_property};
use serde::{Deserialize, Serialize};
use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::error::{Error, Result};
use wayfarer_common::utils::hash::{FastHashMap, map_with_capacity, set_with_capacity};

/// A graph vertex.
///
/// Coordinates are only consulted by informed search, and only when both
/// are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node id.
    pub id: NodeId,
    /// Planar x coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Planar y coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Node {
    /// Creates a node without coordinates.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self {
            id,
            x: None,
            y: None,
        }
    }

    /// Creates a node at the given planar position.
    #[must_use]
    pub const fn at(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns `(x, y)` if both coordinates are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }
}

/// An undirected, possibly parallel, connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge id.
    pub id: EdgeId,
    /// First endpoint.
    #[serde(alias = "sourceId")]
    pub source: NodeId,
    /// Second endpoint.
    #[serde(alias = "targetId")]
    pub target: NodeId,
    /// Free-form properties; `weight`/`Weight` sets the traversal cost.
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

impl Edge {
    /// Creates an edge with no properties.
    #[must_use]
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            properties: PropertyBag::new(),
        }
    }

    /// Creates an edge with a `weight` property.
    #[must_use]
    pub fn weighted(id: EdgeId, source: NodeId, target: NodeId, weight: i64) -> Self {
        Self::new(id, source, target).with_property("weight", weight.to_string())
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Returns true if both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Plain node and edge lists, the serialized form of a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotParts {
    /// Nodes in supplied order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in supplied order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// An immutable, validated view of a graph for one search call.
///
/// The node list defines the id domain: an edge only participates in
/// traversal when both of its endpoints are in the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SnapshotParts", into = "SnapshotParts")]
pub struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: FastHashMap<NodeId, usize>,
    edge_index: FastHashMap<EdgeId, usize>,
}

impl GraphSnapshot {
    /// Builds a snapshot from explicit node and edge lists.
    ///
    /// # Errors
    ///
    /// Returns an error if two nodes or two edges share an id, or if any
    /// edge resolves to a negative weight. Returns
    /// [`Error::WeightOverflow`] if the weights of the traversable edges
    /// sum to `i64::MAX` or more, which keeps every path cost representable.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        let edges: Vec<Edge> = edges.into_iter().collect();

        let mut node_index = map_with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id, pos).is_some() {
                return Err(Error::DuplicateNode(node.id));
            }
        }

        let mut edge_index = map_with_capacity(edges.len());
        let mut total_weight = 0i64;
        for (pos, edge) in edges.iter().enumerate() {
            if edge_index.insert(edge.id, pos).is_some() {
                return Err(Error::DuplicateEdge(edge.id));
            }
            let weight = edge_weight(edge);
            if weight < 0 {
                return Err(Error::NegativeWeight {
                    edge: edge.id,
                    weight,
                });
            }
            if node_index.contains_key(&edge.source) && node_index.contains_key(&edge.target) {
                total_weight = total_weight
                    .checked_add(weight)
                    .filter(|&total| total < i64::MAX)
                    .ok_or(Error::WeightOverflow { edge: edge.id })?;
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
            edge_index,
        })
    }

    /// Builds a snapshot whose node domain is inferred from edge endpoints.
    ///
    /// Nodes are listed in order of first appearance and carry no
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`GraphSnapshot::new`].
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut seen = set_with_capacity(edges.len());
        let mut nodes = Vec::new();
        for edge in &edges {
            for id in [edge.source, edge.target] {
                if seen.insert(id) {
                    nodes.push(Node::new(id));
                }
            }
        }
        Self::new(nodes, edges)
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&pos| &self.edges[pos])
    }

    /// Returns true if `id` is in the node domain.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Returns true if both endpoints of `edge` are in the node domain.
    #[must_use]
    pub fn participates(&self, edge: &Edge) -> bool {
        self.contains_node(edge.source) && self.contains_node(edge.target)
    }

    /// All nodes, in the order they were supplied.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in the order they were supplied.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges whose endpoints are both in the node domain.
    pub fn traversable_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| self.participates(e))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, including non-traversable ones.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if any traversable edge carries an explicit weight
    /// property.
    #[must_use]
    pub fn has_weight_properties(&self) -> bool {
        self.traversable_edges()
            .any(|e| weight_property(e).is_some())
    }
}

impl TryFrom<SnapshotParts> for GraphSnapshot {
    type Error = Error;

    fn try_from(parts: SnapshotParts) -> Result<Self> {
        Self::new(parts.nodes, parts.edges)
    }
}

impl From<GraphSnapshot> for SnapshotParts {
    fn from(snapshot: GraphSnapshot) -> Self {
        Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
        }
    }
}
