//! Storage backends for memoized results.
//!
//! The memoizing wrappers only need to get and put values, so any map-like container can serve as
//! a cache. The unbounded default is a `HashMap` with whatever hasher the caller likes; with the
//! `full` feature an `lru::LruCache` bounds the number of entries.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A cache of computed values, owned by whoever calls the memoized function.
///
/// `lookup` takes `&mut self` because some backends (LRU) reorder entries on access.
pub trait MemoStore<K, V> {
    /// Returns a copy of the value stored for `key`, if any.
    fn lookup(&mut self, key: &K) -> Option<V>;
    /// Stores `value` under `key`, replacing a previous value.
    fn store(&mut self, key: K, value: V);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

/// The default factorial cache: requested `n` to `n!`.
pub type FactorialCache = HashMap<i64, u64>;

// Covers std's HashMap as well as FxHashMap, ahash::HashMap and other hasher aliases.
impl<K, V, S> MemoStore<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn lookup(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K, V> MemoStore<K, V> for BTreeMap<K, V>
where
    K: Ord,
    V: Clone,
{
    fn lookup(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}

// Bounded: evicts the least recently used entry once the capacity is reached.
#[cfg(feature = "full")]
impl<K, V> MemoStore<K, V> for lru::LruCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn lookup(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.put(key, value);
    }

    fn len(&self) -> usize {
        lru::LruCache::len(self)
    }

    fn clear(&mut self) {
        lru::LruCache::clear(self)
    }
}
