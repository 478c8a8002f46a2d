//! The query entry point.

use rayon::prelude::*;

use wayfarer_adapters::plugins::algorithms::{
    self, AStarResult, Heuristic, KShortestPaths, PathResult,
};
use wayfarer_common::types::NodeId;
use wayfarer_common::utils::error::{Error, Result};
use wayfarer_core::{GraphSnapshot, TextMatcher};

use crate::config::Config;

/// Runs path and text queries with a fixed configuration.
///
/// The engine holds no graph state. Every query borrows a caller-supplied
/// [`GraphSnapshot`], so one engine can serve any number of snapshots from
/// any number of threads.
///
/// # Examples
///
/// ```
/// use wayfarer_common::types::{EdgeId, NodeId};
/// use wayfarer_core::{Edge, GraphSnapshot};
/// use wayfarer_engine::{Config, PathEngine};
///
/// let n = NodeId::new;
/// let snapshot = GraphSnapshot::from_edges([
///     Edge::weighted(EdgeId::new(0), n(1), n(2), 4),
///     Edge::weighted(EdgeId::new(1), n(2), n(3), 1),
/// ])?;
///
/// let engine = PathEngine::new(Config::default());
/// let path = engine.shortest_path(&snapshot, n(1), n(3));
/// assert_eq!(path.total_weight, 5);
/// # Ok::<(), wayfarer_common::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    config: Config,
}

impl PathEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cheapest path between two nodes, or the sentinel.
    #[must_use]
    pub fn shortest_path(
        &self,
        snapshot: &GraphSnapshot,
        source: NodeId,
        target: NodeId,
    ) -> PathResult {
        algorithms::dijkstra(snapshot, source, target)
    }

    /// A* with the configured heuristic.
    #[must_use]
    pub fn astar_path(
        &self,
        snapshot: &GraphSnapshot,
        source: NodeId,
        target: NodeId,
    ) -> AStarResult {
        self.astar_path_with(snapshot, source, target, self.config.heuristic)
    }

    /// A* with an explicit heuristic.
    #[must_use]
    pub fn astar_path_with(
        &self,
        snapshot: &GraphSnapshot,
        source: NodeId,
        target: NodeId,
        heuristic: Heuristic,
    ) -> AStarResult {
        algorithms::astar(snapshot, source, target, heuristic)
    }

    /// A* with a heuristic chosen by name; unknown names mean Euclidean.
    #[must_use]
    pub fn astar_path_named(
        &self,
        snapshot: &GraphSnapshot,
        source: NodeId,
        target: NodeId,
        heuristic: &str,
    ) -> AStarResult {
        self.astar_path_with(snapshot, source, target, Heuristic::from_name(heuristic))
    }

    /// Up to `k` loopless paths, cheapest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `k` is zero or exceeds
    /// [`Config::max_paths`].
    pub fn k_shortest_paths(
        &self,
        snapshot: &GraphSnapshot,
        source: NodeId,
        target: NodeId,
        k: usize,
    ) -> Result<KShortestPaths> {
        if k > self.config.max_paths {
            return Err(Error::InvalidArgument(format!(
                "k = {} exceeds the configured maximum of {}",
                k, self.config.max_paths
            )));
        }
        algorithms::k_shortest_paths(snapshot, source, target, k)
    }

    /// Shortest paths for many independent pairs.
    ///
    /// Results are in the same order as `pairs`. Pairs run on the rayon
    /// pool when [`Config::parallel_batches`] is set.
    #[must_use]
    pub fn shortest_paths_batch(
        &self,
        snapshot: &GraphSnapshot,
        pairs: &[(NodeId, NodeId)],
    ) -> Vec<PathResult> {
        tracing::debug!(
            "Running {} shortest path queries (parallel: {})",
            pairs.len(),
            self.config.parallel_batches
        );
        if self.config.parallel_batches {
            Self::batch_parallel(snapshot, pairs)
        } else {
            Self::batch_sequential(snapshot, pairs)
        }
    }

    fn batch_parallel(snapshot: &GraphSnapshot, pairs: &[(NodeId, NodeId)]) -> Vec<PathResult> {
        pairs
            .par_iter()
            .map(|&(source, target)| algorithms::dijkstra(snapshot, source, target))
            .collect()
    }

    fn batch_sequential(snapshot: &GraphSnapshot, pairs: &[(NodeId, NodeId)]) -> Vec<PathResult> {
        pairs
            .iter()
            .map(|&(source, target)| algorithms::dijkstra(snapshot, source, target))
            .collect()
    }

    /// A text matcher carrying the configured case sensitivity and fuzzy
    /// edit budget.
    #[must_use]
    pub fn matcher(&self) -> TextMatcher {
        TextMatcher::new()
            .with_case_sensitive(self.config.case_sensitive)
            .with_max_distance(self.config.fuzzy_max_distance)
    }
}
