//! Text similarity primitives used to rank search results.
//!
//! Everything here is pure and string-only; nothing depends on the graph
//! model.
//!
//! - [`fuzzy`] - Edit distance, fuzzy containment, relevance, substring position
//! - [`pattern`] - Regular-expression matching over user-typed patterns
//! - [`matcher`] - [`TextMatcher`], the same operations with stored options
//!
//! Positions and lengths are counted in `char`s, not bytes.

pub mod fuzzy;
pub mod matcher;
pub mod pattern;

pub use fuzzy::{TOKEN_DELIMITERS, TextMatch, edit_distance, find_match, fuzzy_match, relevance};
pub use matcher::{DEFAULT_MAX_DISTANCE, TextMatcher};
pub use pattern::{find_regex_match, regex_match};
