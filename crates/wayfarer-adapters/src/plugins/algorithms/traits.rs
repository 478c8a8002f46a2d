//! Shared building blocks for priority-queue driven searches.

use std::cmp::Ordering;

/// A priority that can be totally ordered.
pub trait Score: Copy {
    /// Total order over scores.
    fn score_cmp(&self, other: &Self) -> Ordering;
}

impl Score for i64 {
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Score for f64 {
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Heap entry that turns [`std::collections::BinaryHeap`] into a min-heap.
///
/// Lower scores pop first. Equal scores pop the smaller item first, which
/// keeps searches reproducible when several frontier nodes tie.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Score, T: Ord> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Score, T: Ord> Eq for MinScored<K, T> {}

impl<K: Score, T: Ord> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Score, T: Ord> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .0
            .score_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}
