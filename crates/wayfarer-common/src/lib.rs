//! # wayfarer-common
//!
//! Foundation layer for Wayfarer: identifier types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Wayfarer crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Identifier types ([`NodeId`], [`EdgeId`])
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeId, NodeId};
pub use utils::error::{Error, Result};
