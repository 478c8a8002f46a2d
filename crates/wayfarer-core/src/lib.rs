//! # wayfarer-core
//!
//! Core layer for Wayfarer: graph snapshots, adjacency indexing, and text
//! matching primitives.
//!
//! This crate provides the input model every search runs over. It depends
//! only on `wayfarer-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Nodes, edges, property bags, snapshots, and edge weights
//! - [`index`] - The undirected adjacency index built per search
//! - [`text`] - Edit distance, fuzzy containment, relevance, and pattern matching

pub mod graph;
pub mod index;
pub mod text;

// Re-export commonly used types
pub use graph::{DEFAULT_WEIGHT, Edge, GraphSnapshot, Node, PropertyBag, edge_weight};
pub use index::{AdjacencyIndex, Incidence};
pub use text::{TextMatch, TextMatcher};
