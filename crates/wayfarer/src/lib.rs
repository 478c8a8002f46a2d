//! # Wayfarer
//!
//! Pure-Rust pathfinding and fuzzy text matching over in-memory graph
//! snapshots.
//!
//! Start with [`PathEngine`]. Build a [`GraphSnapshot`] from your nodes and
//! edges for each query; the engine never keeps graph state between calls.
//!
//! ## Algorithms
//!
//! | Query | Algorithm | Notes |
//! | ----- | --------- | ----- |
//! | [`PathEngine::shortest_path`] | Dijkstra | Non-negative integer weights |
//! | [`PathEngine::astar_path`] | A* | Falls back to Dijkstra without coordinates |
//! | [`PathEngine::k_shortest_paths`] | Yen | Loopless, cheapest first |
//! | [`PathEngine::matcher`] | Levenshtein | Fuzzy match, relevance, regex |
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfarer::{Edge, EdgeId, GraphSnapshot, Node, NodeId, PathEngine};
//!
//! let n = NodeId::new;
//! let snapshot = GraphSnapshot::new(
//!     [Node::new(n(1)), Node::new(n(2)), Node::new(n(3))],
//!     [
//!         Edge::weighted(EdgeId::new(0), n(1), n(2), 100),
//!         Edge::weighted(EdgeId::new(1), n(1), n(3), 1),
//!         Edge::weighted(EdgeId::new(2), n(3), n(2), 1),
//!     ],
//! )?;
//!
//! let engine = PathEngine::default();
//! let path = engine.shortest_path(&snapshot, n(1), n(2));
//! assert_eq!(path.nodes, vec![n(1), n(3), n(2)]);
//!
//! let ranked = engine.matcher().relevance("Central Station", "central");
//! assert!(ranked > 0.5);
//! # Ok::<(), wayfarer::Error>(())
//! ```

// Re-export the main engine API
pub use wayfarer_engine::{Config, PathEngine};

// Re-export core types - you'll need these for building snapshots
pub use wayfarer_common::types::{EdgeId, NodeId};
pub use wayfarer_common::utils::error::{Error, Result};
pub use wayfarer_core::{Edge, GraphSnapshot, Node, PropertyBag, TextMatch, TextMatcher};

// Re-export result types
pub use wayfarer_adapters::plugins::algorithms::{
    AStarResult, Heuristic, KShortestPaths, NO_PATH_WEIGHT, PathResult,
};
