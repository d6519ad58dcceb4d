//! Hash-maps, hash-sets and ordered maps used by the hull solver.
//!
//! The solver never iterates over a [`HashMap`] or a [`HashSet`]; everything it walks is kept
//! in an [`IndexMap`] so that a given input always yields the same sequence of
//! steps.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;

/// Insertion-ordered map with deterministic iteration, using [`indexmap::IndexMap`].
pub type IndexMap<K, V> = indexmap::IndexMap<K, V>;
