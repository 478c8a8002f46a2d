//! Core type definitions for Wayfarer.
//!
//! Graph entities are addressed by opaque integer handles that are stable
//! for the lifetime of one call:
//! - [`NodeId`] identifies a vertex
//! - [`EdgeId`] identifies a connection (unique per edge, even between the
//!   same pair of nodes)

mod id;

pub use id::{EdgeId, NodeId};
