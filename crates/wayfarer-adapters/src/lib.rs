//! # wayfarer-adapters
//!
//! Algorithm layer for Wayfarer.
//!
//! ## Modules
//!
//! - [`plugins`] - Pathfinding algorithms over graph snapshots

pub mod plugins;
