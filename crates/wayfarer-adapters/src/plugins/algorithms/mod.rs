//! Graph algorithms for Wayfarer.
//!
//! Every algorithm is a pure function over a caller-supplied
//! [`GraphSnapshot`](wayfarer_core::GraphSnapshot). Each call builds its own
//! adjacency index and working state, so concurrent calls over the same
//! snapshot need no locking.
//!
//! ## Algorithm Categories
//!
//! - [`dijkstra`] - Shortest path over non-negative integer weights
//! - [`astar()`] - Coordinate-guided A*, delegating to Dijkstra when it cannot run
//! - [`k_shortest_paths`] - Yen's k shortest loopless paths
//!
//! ## Usage
//!
//! ```
//! use wayfarer_adapters::plugins::algorithms::dijkstra;
//! use wayfarer_common::types::{EdgeId, NodeId};
//! use wayfarer_core::{Edge, GraphSnapshot};
//!
//! let n = NodeId::new;
//! let snapshot = GraphSnapshot::from_edges([
//!     Edge::weighted(EdgeId::new(0), n(1), n(2), 100),
//!     Edge::weighted(EdgeId::new(1), n(1), n(3), 1),
//!     Edge::weighted(EdgeId::new(2), n(3), n(2), 1),
//! ])?;
//!
//! let path = dijkstra(&snapshot, n(1), n(2));
//! assert_eq!(path.nodes, vec![n(1), n(3), n(2)]);
//! assert_eq!(path.total_weight, 2);
//! # Ok::<(), wayfarer_common::Error>(())
//! ```

mod astar;
mod k_shortest;
mod path;
mod shortest_path;
mod traits;

// Core traits
pub use traits::{MinScored, Score};

// Results
pub use path::{KShortestPaths, NO_PATH_WEIGHT, PathResult};

// Shortest path algorithms
pub use astar::{AStarResult, Heuristic, astar};
pub use k_shortest::k_shortest_paths;
pub use shortest_path::{Exclusions, dijkstra, dijkstra_indexed};
