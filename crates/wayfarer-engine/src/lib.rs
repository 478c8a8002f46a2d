//! # wayfarer-engine
//!
//! The main entry point for Wayfarer: configuration and the query facade.
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`engine`] - [`PathEngine`], path queries, batch search, and text matching

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;

pub use config::Config;
pub use engine::PathEngine;
