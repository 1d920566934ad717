//! LRU cache facade
//!
//! Coordinates the key index and the recency list so every mutation keeps
//! them consistent, behind a single lock.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::RecencyList;
use crate::stats::CacheStats;
use crate::traits::Cache;

/// The key index and the recency list form one logical resource; they are
/// only ever touched together, under the facade's lock.
struct Inner<K, V> {
    index: HashMap<K, usize, RandomState>,
    list: RecencyList<K, V>,
}

/// Fixed-capacity LRU cache, safe to share across threads.
///
/// Once `capacity` entries are resident, inserting a new key evicts the
/// least-recently-touched entry. Both `get` and `put` count as touches and
/// run in O(1).
///
/// A successful `get` promotes the entry to most-recently-used, so it takes
/// the write lock like `put` does; the read lock only serves the size and
/// membership queries.
///
/// # Examples
/// ```
/// use memlru::LruCache;
///
/// let cache = LruCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
/// cache.put("c", 3); // evicts "b", the least recently touched
///
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(1));
/// ```
pub struct LruCache<K, V> {
    /// Index + recency list, guarded as one unit
    inner: RwLock<Inner<K, V>>,

    /// Hit/miss/eviction counters, updated outside the lock
    stats: CacheStats,

    /// Maximum number of resident entries, fixed at construction
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero; a cache
    /// that can hold nothing is a contract violation, rejected before the
    /// cache exists.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            inner: RwLock::new(Inner {
                index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
                list: RecencyList::with_capacity(capacity),
            }),
            stats: CacheStats::new(),
            capacity,
        })
    }

    /// Insert or update a key.
    ///
    /// An existing key has its value replaced in place and is promoted to
    /// most-recently-used; the size does not change and nothing is evicted.
    /// A new key is inserted at the front, evicting the back entry first if
    /// the cache is full. At most one entry is evicted per call.
    pub fn put(&self, key: K, value: V) {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        if let Some(&idx) = inner.index.get(&key) {
            inner.list.set_value(idx, value);
            inner.list.move_to_front(idx);
            self.stats.record_update();
            return;
        }

        if inner.list.len() >= self.capacity {
            // Evict-then-insert in the same critical section, so no caller
            // can observe the index and list out of sync.
            if let Some(evicted) = inner.list.remove_back() {
                inner.index.remove(&evicted.key);
                self.stats.record_eviction();
                trace!(len = inner.list.len(), "evicted least recently used entry");
            }
        }

        let idx = inner.list.insert_front(key.clone(), value);
        inner.index.insert(key, idx);
        self.stats.record_insert();
    }

    /// Look up a key, promoting it to most-recently-used on a hit.
    ///
    /// A read counts as a touch: a hit re-orders the cache. Absent keys
    /// return `None` with no side effect on recency order.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        match inner.index.get(key) {
            Some(&idx) => {
                inner.list.move_to_front(idx);
                self.stats.record_hit();
                inner.list.value(idx).cloned()
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let idx = inner.index.remove(key)?;
        inner.list.remove(idx).map(|entry| entry.value)
    }

    /// Whether `key` is currently resident.
    ///
    /// Unlike [`get`], this does not touch the entry: membership probes do
    /// not disturb recency order.
    ///
    /// [`get`]: LruCache::get
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().index.contains_key(key)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.inner.read().list.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().list.is_empty()
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Index and list are emptied in one critical section.
    ///
    /// Statistics counters are cumulative and survive a clear; reset them
    /// explicitly via [`CacheStats::reset`].
    pub fn clear(&self) {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let dropped = inner.list.len();
        inner.index.clear();
        inner.list.clear();
        debug!(dropped, "cache cleared");
    }

    /// Hit/miss/insert/update/eviction counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn put(&self, key: K, value: V) {
        LruCache::put(self, key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn is_empty(&self) -> bool {
        LruCache::is_empty(self)
    }

    fn clear(&self) {
        LruCache::clear(self);
    }
}
