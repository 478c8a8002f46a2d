//! Utility functions and helpers.
//!
//! - [`error`] - The error taxonomy shared by every crate
//! - [`hash`] - Hash map and set aliases used for per-call working state

pub mod error;
pub mod hash;
