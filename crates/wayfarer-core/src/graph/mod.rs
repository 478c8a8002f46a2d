//! The graph input model.
//!
//! Callers build a [`GraphSnapshot`] from plain [`Node`] and [`Edge`]
//! values for each query. Snapshots are immutable once built; searches
//! only ever borrow them.

mod property;
mod snapshot;
mod weight;

pub use property::PropertyBag;
pub use snapshot::{Edge, GraphSnapshot, Node, SnapshotParts};
pub use weight::{DEFAULT_WEIGHT, WEIGHT_KEYS, edge_weight, weight_property};
