//! Yen's k shortest loopless paths.
//!
//! Each accepted path is branched at every node along it. The branch
//! ("spur") search runs Dijkstra over one shared [`AdjacencyIndex`] with
//! the root prefix and already-used continuations hidden through
//! [`Exclusions`], so the snapshot is never copied.
//!
//! Paths are told apart by their node sequence. Two routes that differ
//! only in which parallel edge they take count as the same path.

use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_common::utils::error::{Error, Result};
use wayfarer_core::{AdjacencyIndex, GraphSnapshot, edge_weight};

use super::path::{KShortestPaths, PathResult};
use super::shortest_path::{Exclusions, dijkstra_indexed};

/// Finds up to `k` loopless paths from `source` to `target`, cheapest first.
///
/// Fewer than `k` paths are returned when the graph runs out of distinct
/// simple paths; none are returned when the target is unreachable or an
/// endpoint is unknown. Among candidates of equal weight, the one
/// discovered first is accepted first.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `k` is zero.
pub fn k_shortest_paths(
    snapshot: &GraphSnapshot,
    source: NodeId,
    target: NodeId,
    k: usize,
) -> Result<KShortestPaths> {
    if k == 0 {
        return Err(Error::InvalidArgument("k must be at least 1".to_string()));
    }

    let index = AdjacencyIndex::for_snapshot(snapshot);
    let first = dijkstra_indexed(&index, source, target, &Exclusions::new());
    if !first.is_found() {
        tracing::debug!("No path from {} to {}, k-shortest is empty", source, target);
        return Ok(KShortestPaths {
            requested: k,
            paths: Vec::new(),
        });
    }

    let mut accepted = vec![first];
    let mut candidates: Vec<PathResult> = Vec::new();

    while accepted.len() < k {
        let previous = accepted[accepted.len() - 1].clone();

        for spur_pos in 0..previous.nodes.len() - 1 {
            let spur_node = previous.nodes[spur_pos];
            let root_nodes = &previous.nodes[..=spur_pos];
            let root_edges = &previous.edges[..spur_pos];

            let mut exclusions = Exclusions::new();
            for path in &accepted {
                if path.nodes.len() > spur_pos + 1 && path.nodes[..=spur_pos] == *root_nodes {
                    exclude_between(
                        &index,
                        &mut exclusions,
                        path.nodes[spur_pos],
                        path.nodes[spur_pos + 1],
                    );
                }
            }
            for &node in &root_nodes[..spur_pos] {
                exclusions.exclude_node(node);
            }

            let spur = dijkstra_indexed(&index, spur_node, target, &exclusions);
            if !spur.is_found() {
                continue;
            }

            let mut nodes = root_nodes[..spur_pos].to_vec();
            nodes.extend_from_slice(&spur.nodes);
            let mut edges = root_edges.to_vec();
            edges.extend_from_slice(&spur.edges);
            let total_weight = sum_weights(snapshot, &edges);

            let seen = accepted
                .iter()
                .chain(candidates.iter())
                .any(|path| path.nodes == nodes);
            if !seen {
                tracing::trace!(
                    "Candidate via spur {} with weight {}",
                    spur_node,
                    total_weight
                );
                candidates.push(PathResult {
                    nodes,
                    edges,
                    total_weight,
                });
            }
        }

        // min_by_key keeps the first of several equal minima
        let Some(best) = candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, path)| path.total_weight)
            .map(|(pos, _)| pos)
        else {
            break;
        };
        let next = candidates.remove(best);
        tracing::trace!(
            "Accepted path {} with weight {}",
            accepted.len() + 1,
            next.total_weight
        );
        accepted.push(next);
    }

    tracing::debug!(
        "Found {} of {} paths from {} to {}",
        accepted.len(),
        k,
        source,
        target
    );
    Ok(KShortestPaths {
        requested: k,
        paths: accepted,
    })
}

/// Hides every edge joining `from` and `to`, parallel edges included.
fn exclude_between(index: &AdjacencyIndex, exclusions: &mut Exclusions, from: NodeId, to: NodeId) {
    for incidence in index.incident(from) {
        if incidence.neighbor == to {
            exclusions.exclude_edge(incidence.edge);
        }
    }
}

fn sum_weights(snapshot: &GraphSnapshot, edges: &[EdgeId]) -> i64 {
    edges
        .iter()
        .filter_map(|&id| snapshot.edge(id))
        .map(edge_weight)
        .fold(0i64, i64::saturating_add)
}
