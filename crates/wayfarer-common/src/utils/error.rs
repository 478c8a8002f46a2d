//! Error types.
//!
//! Only precondition violations are errors. A missing path, an unknown
//! node id, or a malformed user pattern are ordinary outcomes and are
//! reported through sentinel values instead.

use crate::types::{EdgeId, NodeId};
use thiserror::Error;

/// Result alias used throughout Wayfarer.
pub type Result<T> = std::result::Result<T, Error>;

/// Misuse of the library surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two nodes in one snapshot share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// Two edges in one snapshot share an id.
    #[error("duplicate edge id: {0}")]
    DuplicateEdge(EdgeId),

    /// An edge resolves to a negative weight, which shortest-path search
    /// cannot handle.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// The offending edge.
        edge: EdgeId,
        /// The resolved weight.
        weight: i64,
    },

    /// The traversable edge weights add up to `i64::MAX` or more, so a path
    /// cost could overflow.
    #[error("total edge weight overflows at edge {edge}")]
    WeightOverflow {
        /// The edge whose weight pushed the running total over the limit.
        edge: EdgeId,
    },

    /// A call argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
