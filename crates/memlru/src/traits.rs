//! Generic cache contract

/// The key-value cache contract: upsert, lookup, size and clear.
///
/// All methods take `&self`; implementations are expected to be internally
/// synchronized so a shared cache can be used from many threads without
/// external locking.
pub trait Cache<K, V> {
    /// Upsert an element. An existing element for `key` is updated in place,
    /// otherwise a new element is created.
    fn put(&self, key: K, value: V);

    /// Find an element by its key, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<V>;

    /// Number of elements currently in the cache.
    fn len(&self) -> usize;

    /// Whether the cache holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements from the cache.
    fn clear(&self);
}
