use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use priority_queue::PriorityQueue;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion ordered set, iteration order is deterministic
pub(crate) type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Indexed priority queue - supports priority updates and removal by item
/// Pops the highest priority first, wrap priorities in `Reverse` for min ordering
pub(crate) type FxPriorityQueue<K, P> = PriorityQueue<K, P, BuildHasherDefault<FxHasher>>;
