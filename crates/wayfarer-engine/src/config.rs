//! Engine configuration.

use serde::{Deserialize, Serialize};
use wayfarer_adapters::plugins::algorithms::Heuristic;
use wayfarer_core::text::DEFAULT_MAX_DISTANCE;

/// Default upper bound on `k` for k-shortest-path queries.
pub const DEFAULT_MAX_PATHS: usize = 64;

/// Configuration for a [`PathEngine`](crate::PathEngine).
///
/// Every field has a default, so a partial JSON document deserializes into
/// a complete configuration.
///
/// # Examples
///
/// ```
/// use wayfarer_engine::Config;
/// use wayfarer_adapters::plugins::algorithms::Heuristic;
///
/// let config = Config::default()
///     .with_heuristic(Heuristic::Manhattan)
///     .with_max_paths(8);
/// assert_eq!(config.max_paths, 8);
/// assert!(!config.case_sensitive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heuristic used by A* when the caller does not pick one.
    pub heuristic: Heuristic,

    /// Largest `k` accepted by k-shortest-path queries.
    pub max_paths: usize,

    /// Per-token edit budget for fuzzy matching.
    pub fuzzy_max_distance: usize,

    /// Whether text comparisons are case-sensitive.
    pub case_sensitive: bool,

    /// Whether batch searches run on the rayon thread pool.
    pub parallel_batches: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            max_paths: DEFAULT_MAX_PATHS,
            fuzzy_max_distance: DEFAULT_MAX_DISTANCE,
            case_sensitive: false,
            parallel_batches: true,
        }
    }
}

impl Config {
    /// Sets the default A* heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the default A* heuristic by name.
    ///
    /// Unrecognized names select the Euclidean heuristic.
    #[must_use]
    pub fn with_heuristic_name(self, name: &str) -> Self {
        self.with_heuristic(Heuristic::from_name(name))
    }

    /// Sets the largest `k` accepted by k-shortest-path queries.
    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Sets the per-token edit budget for fuzzy matching.
    #[must_use]
    pub fn with_fuzzy_max_distance(mut self, distance: usize) -> Self {
        self.fuzzy_max_distance = distance;
        self
    }

    /// Enables or disables case-sensitive text comparison.
    #[must_use]
    pub fn with_case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Enables or disables parallel batch searches.
    #[must_use]
    pub fn with_parallel_batches(mut self, enabled: bool) -> Self {
        self.parallel_batches = enabled;
        self
    }
}
