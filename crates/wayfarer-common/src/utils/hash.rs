//! Hash map aliases.
//!
//! Search state (distances, predecessors, adjacency) is keyed by small
//! integer ids and rebuilt on every call, so the maps favour raw hashing
//! speed over DoS resistance.

/// Hash map backed by `hashbrown` with `ahash`.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set backed by `hashbrown` with `ahash`.
pub type FastHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// Creates an empty [`FastHashMap`] with room for `capacity` entries.
#[must_use]
pub fn map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new())
}

/// Creates an empty [`FastHashSet`] with room for `capacity` entries.
#[must_use]
pub fn set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, ahash::RandomState::new())
}
