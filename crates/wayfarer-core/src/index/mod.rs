//! Index structures that make searches fast.
//!
//! - [`adjacency`] - Undirected incidence lists, rebuilt for every search

pub mod adjacency;

pub use adjacency::{AdjacencyIndex, Incidence};
