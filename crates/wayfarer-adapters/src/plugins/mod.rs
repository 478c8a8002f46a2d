//! Plugin modules for Wayfarer.
//!
//! ## Modules
//!
//! - [`algorithms`] - Shortest path, A*, and k-shortest loopless paths

pub mod algorithms;
